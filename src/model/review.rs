use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Per-reviewer recommendation, distinct from the submission's own
/// aggregate-derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerDecision {
    Accept,
    Reject,
    Revision,
}

impl ReviewerDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewerDecision::Accept => "accept",
            ReviewerDecision::Reject => "reject",
            ReviewerDecision::Revision => "revision",
        }
    }
}

impl FromStr for ReviewerDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(ReviewerDecision::Accept),
            "reject" => Ok(ReviewerDecision::Reject),
            "revision" => Ok(ReviewerDecision::Revision),
            other => Err(format!("unknown reviewer decision '{}'", other)),
        }
    }
}

impl fmt::Display for ReviewerDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three scored criteria of a review, each an integer in [1,5].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ReviewScores {
    pub relevance: i32,
    pub quality: i32,
    pub originality: i32,
}

impl ReviewScores {
    /// The review's own three-criterion average.
    pub fn average(&self) -> f64 {
        f64::from(self.relevance + self.quality + self.originality) / 3.0
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub submission_id: i32,
    pub reviewer_id: i32,
    pub scores: ReviewScores,
    pub average_score: f64,
    pub comments: String,
    pub decision: ReviewerDecision,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn from_model(review: entity::review::Model) -> Result<Self, String> {
        let decision = review.decision.parse::<ReviewerDecision>()?;
        let scores = ReviewScores {
            relevance: review.relevance_score,
            quality: review.quality_score,
            originality: review.originality_score,
        };
        Ok(Self {
            id: review.id,
            submission_id: review.submission_id,
            reviewer_id: review.reviewer_id,
            scores,
            average_score: scores.average(),
            comments: review.comments,
            decision,
            reviewed_at: review.reviewed_at,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReviewDto {
    pub scores: ReviewScores,
    pub comments: String,
    pub decision: ReviewerDecision,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignReviewersDto {
    pub reviewer_ids: Vec<i32>,
}

/// Result of a reviewer-assignment call.
///
/// The operation is idempotent and tolerant: ids already assigned and ids that
/// don't resolve to a reviewer-role user are reported back instead of failing
/// the whole request.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentOutcomeDto {
    pub submission_id: i32,
    pub assigned_ids: Vec<i32>,
    pub already_assigned_ids: Vec<i32>,
    pub missing_ids: Vec<i32>,
    pub status: crate::model::submission::SubmissionStatus,
}
