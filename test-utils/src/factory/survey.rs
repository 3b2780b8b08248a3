//! Survey factory for creating test surveys with questions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test surveys with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::survey::SurveyFactory;
///
/// let survey = SurveyFactory::new(&db, event.id)
///     .title("Post-event feedback")
///     .inactive()
///     .build()
///     .await?;
/// ```
pub struct SurveyFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    title: String,
    description: Option<String>,
    is_active: bool,
}

impl<'a> SurveyFactory<'a> {
    /// Creates a new SurveyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Survey {id}"` with a unique id
    /// - description: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            title: format!("Survey {}", id),
            description: None,
            is_active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Marks the survey as closed for responses.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds and inserts the survey entity into the database.
    pub async fn build(self) -> Result<entity::survey::Model, DbErr> {
        entity::survey::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active survey with default values.
pub async fn create_survey(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::survey::Model, DbErr> {
    SurveyFactory::new(db, event_id).build().await
}

/// Adds a question to a survey. `kind` is one of `"text"`, `"rating"` or
/// `"choice"`; choice questions get a fixed three-option set.
pub async fn add_question(
    db: &DatabaseConnection,
    survey_id: i32,
    kind: &str,
    position: i32,
) -> Result<entity::survey_question::Model, DbErr> {
    let choices = (kind == "choice").then(|| "Yes,No,Maybe".to_string());

    entity::survey_question::ActiveModel {
        id: ActiveValue::NotSet,
        survey_id: ActiveValue::Set(survey_id),
        question_text: ActiveValue::Set(format!("Question {}", position)),
        kind: ActiveValue::Set(kind.to_string()),
        choices: ActiveValue::Set(choices),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}
