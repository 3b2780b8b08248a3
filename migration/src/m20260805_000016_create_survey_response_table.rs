use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260805_000014_create_survey_table::Survey,
    m20260805_000015_create_survey_question_table::SurveyQuestion,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyResponse::Id))
                    .col(integer(SurveyResponse::SurveyId))
                    .col(integer(SurveyResponse::QuestionId))
                    .col(integer(SurveyResponse::UserId))
                    .col(text_null(SurveyResponse::ResponseText))
                    .col(integer_null(SurveyResponse::ResponseRating))
                    .col(
                        timestamp(SurveyResponse::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_response_survey_id")
                            .from(SurveyResponse::Table, SurveyResponse::SurveyId)
                            .to(Survey::Table, Survey::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_response_question_id")
                            .from(SurveyResponse::Table, SurveyResponse::QuestionId)
                            .to(SurveyQuestion::Table, SurveyQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_response_user_id")
                            .from(SurveyResponse::Table, SurveyResponse::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_survey_response_question_user_unique")
                    .table(SurveyResponse::Table)
                    .col(SurveyResponse::QuestionId)
                    .col(SurveyResponse::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SurveyResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SurveyResponse {
    Table,
    Id,
    SurveyId,
    QuestionId,
    UserId,
    ResponseText,
    ResponseRating,
    CreatedAt,
}
