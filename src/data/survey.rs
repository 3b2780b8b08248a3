use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use entity::prelude::{Survey, SurveyQuestion, SurveyResponse};

use crate::model::survey::{CreateSurveyQuestionDto, SurveyAnswerDto};

pub struct SurveyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SurveyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        SurveyRepository { db }
    }

    pub async fn create(
        &self,
        event_id: i32,
        title: String,
        description: Option<String>,
    ) -> Result<entity::survey::Model, DbErr> {
        entity::survey::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::survey::Model>, DbErr> {
        Survey::find_by_id(id).one(self.db).await
    }

    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::survey::Model>, DbErr> {
        Survey::find()
            .filter(entity::survey::Column::EventId.eq(event_id))
            .order_by_asc(entity::survey::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn set_active(
        &self,
        survey: entity::survey::Model,
        is_active: bool,
    ) -> Result<entity::survey::Model, DbErr> {
        let mut active: entity::survey::ActiveModel = survey.into();
        active.is_active = ActiveValue::Set(is_active);
        active.update(self.db).await
    }

    pub async fn add_question(
        &self,
        survey_id: i32,
        position: i32,
        params: CreateSurveyQuestionDto,
    ) -> Result<entity::survey_question::Model, DbErr> {
        entity::survey_question::ActiveModel {
            survey_id: ActiveValue::Set(survey_id),
            question_text: ActiveValue::Set(params.question_text),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            choices: ActiveValue::Set(params.choices),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_questions(
        &self,
        survey_id: i32,
    ) -> Result<Vec<entity::survey_question::Model>, DbErr> {
        SurveyQuestion::find()
            .filter(entity::survey_question::Column::SurveyId.eq(survey_id))
            .order_by_asc(entity::survey_question::Column::Position)
            .all(self.db)
            .await
    }

    /// Whether the user has already responded to any question of this survey.
    /// Responses are submitted as one batch, so any row means a full pass.
    pub async fn has_responded(&self, survey_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = SurveyResponse::find()
            .filter(entity::survey_response::Column::SurveyId.eq(survey_id))
            .filter(entity::survey_response::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn add_response(
        &self,
        survey_id: i32,
        user_id: i32,
        answer: SurveyAnswerDto,
    ) -> Result<entity::survey_response::Model, DbErr> {
        entity::survey_response::ActiveModel {
            survey_id: ActiveValue::Set(survey_id),
            question_id: ActiveValue::Set(answer.question_id),
            user_id: ActiveValue::Set(user_id),
            response_text: ActiveValue::Set(answer.response_text),
            response_rating: ActiveValue::Set(answer.response_rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_responses(
        &self,
        survey_id: i32,
    ) -> Result<Vec<entity::survey_response::Model>, DbErr> {
        SurveyResponse::find()
            .filter(entity::survey_response::Column::SurveyId.eq(survey_id))
            .all(self.db)
            .await
    }

    /// Distinct users who responded to this survey.
    pub async fn respondent_ids(&self, survey_id: i32) -> Result<Vec<i32>, DbErr> {
        SurveyResponse::find()
            .select_only()
            .column(entity::survey_response::Column::UserId)
            .filter(entity::survey_response::Column::SurveyId.eq(survey_id))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }
}
