use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::review::ReviewDto;

/// Presentation format requested by the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Oral,
    Poster,
    Display,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Oral => "oral",
            SubmissionKind::Poster => "poster",
            SubmissionKind::Display => "display",
        }
    }
}

impl FromStr for SubmissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oral" => Ok(SubmissionKind::Oral),
            "poster" => Ok(SubmissionKind::Poster),
            "display" => Ok(SubmissionKind::Display),
            other => Err(format!("unknown submission kind '{}'", other)),
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submission review state.
///
/// `Accepted`, `Rejected` and `RevisionRequested` are terminal for the review
/// engine: once reached, further reviews are still recorded but never re-fire
/// the decision rule. Organizers may override manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    UnderReview,
    Accepted,
    Rejected,
    RevisionRequested,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::UnderReview => "under_review",
            SubmissionStatus::Accepted => "accepted",
            SubmissionStatus::Rejected => "rejected",
            SubmissionStatus::RevisionRequested => "revision_requested",
        }
    }

    /// True once the review engine has produced a decision.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Accepted
                | SubmissionStatus::Rejected
                | SubmissionStatus::RevisionRequested
        )
    }

    /// Human-readable form used in author-facing notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::UnderReview => "Under review",
            SubmissionStatus::Accepted => "Accepted",
            SubmissionStatus::Rejected => "Rejected",
            SubmissionStatus::RevisionRequested => "Revision requested",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "under_review" => Ok(SubmissionStatus::UnderReview),
            "accepted" => Ok(SubmissionStatus::Accepted),
            "rejected" => Ok(SubmissionStatus::Rejected),
            "revision_requested" => Ok(SubmissionStatus::RevisionRequested),
            other => Err(format!("unknown submission status '{}'", other)),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionDto {
    pub id: i32,
    pub event_id: i32,
    pub author_id: i32,
    pub title: String,
    pub kind: SubmissionKind,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionDto {
    pub fn from_model(submission: entity::submission::Model) -> Result<Self, String> {
        let kind = submission.kind.parse::<SubmissionKind>()?;
        let status = submission.status.parse::<SubmissionStatus>()?;
        Ok(Self {
            id: submission.id,
            event_id: submission.event_id,
            author_id: submission.author_id,
            title: submission.title,
            kind,
            status,
            submitted_at: submission.submitted_at,
        })
    }
}

/// Full submission view: abstract, assigned reviewers, filed reviews and the
/// aggregate score (mean of per-review three-criterion averages; `None` until
/// at least one review exists).
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionDetailDto {
    pub id: i32,
    pub event_id: i32,
    pub author_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub keywords: Option<String>,
    pub kind: SubmissionKind,
    pub status: SubmissionStatus,
    pub assigned_reviewer_ids: Vec<i32>,
    pub reviews: Vec<ReviewDto>,
    pub average_score: Option<f64>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubmissionDto {
    pub title: String,
    pub abstract_text: String,
    pub keywords: Option<String>,
    pub kind: SubmissionKind,
}

/// Organizer manual override of the submission status.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OverrideStatusDto {
    pub status: SubmissionStatus,
}
