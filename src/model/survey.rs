use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SurveyQuestionKind {
    Text,
    Rating,
    Choice,
}

impl SurveyQuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyQuestionKind::Text => "text",
            SurveyQuestionKind::Rating => "rating",
            SurveyQuestionKind::Choice => "choice",
        }
    }
}

impl FromStr for SurveyQuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SurveyQuestionKind::Text),
            "rating" => Ok(SurveyQuestionKind::Rating),
            "choice" => Ok(SurveyQuestionKind::Choice),
            other => Err(format!("unknown survey question kind '{}'", other)),
        }
    }
}

impl fmt::Display for SurveyQuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyQuestionDto {
    pub id: i32,
    pub survey_id: i32,
    pub question_text: String,
    pub kind: SurveyQuestionKind,
    pub choices: Option<String>,
    pub position: i32,
}

impl SurveyQuestionDto {
    pub fn from_model(question: entity::survey_question::Model) -> Result<Self, String> {
        let kind = question.kind.parse::<SurveyQuestionKind>()?;
        Ok(Self {
            id: question.id,
            survey_id: question.survey_id,
            question_text: question.question_text,
            kind,
            choices: question.choices,
            position: question.position,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyDto {
    pub id: i32,
    pub event_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub questions: Vec<SurveyQuestionDto>,
    pub respondents_count: u64,
    pub created_at: DateTime<Utc>,
}

impl SurveyDto {
    pub fn from_model(
        survey: entity::survey::Model,
        questions: Vec<entity::survey_question::Model>,
        respondents_count: u64,
    ) -> Result<Self, String> {
        let questions = questions
            .into_iter()
            .map(SurveyQuestionDto::from_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: survey.id,
            event_id: survey.event_id,
            title: survey.title,
            description: survey.description,
            is_active: survey.is_active,
            questions,
            respondents_count,
            created_at: survey.created_at,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSurveyQuestionDto {
    pub question_text: String,
    pub kind: SurveyQuestionKind,
    pub choices: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSurveyDto {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<CreateSurveyQuestionDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSurveyActiveDto {
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SurveyAnswerDto {
    pub question_id: i32,
    pub response_text: Option<String>,
    pub response_rating: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitSurveyResponsesDto {
    pub answers: Vec<SurveyAnswerDto>,
}

/// Aggregated results for one question: every text answer verbatim, ratings
/// reduced to a mean.
#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyQuestionResultDto {
    pub question_id: i32,
    pub question_text: String,
    pub kind: SurveyQuestionKind,
    pub answers_count: u64,
    pub average_rating: Option<f64>,
    pub text_answers: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyResultsDto {
    pub survey_id: i32,
    pub respondents_count: u64,
    pub questions: Vec<SurveyQuestionResultDto>,
}
