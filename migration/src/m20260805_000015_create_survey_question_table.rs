use sea_orm_migration::{prelude::*, schema::*};

use super::m20260805_000014_create_survey_table::Survey;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyQuestion::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyQuestion::Id))
                    .col(integer(SurveyQuestion::SurveyId))
                    .col(text(SurveyQuestion::QuestionText))
                    .col(string(SurveyQuestion::Kind))
                    .col(text_null(SurveyQuestion::Choices))
                    .col(integer(SurveyQuestion::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_question_survey_id")
                            .from(SurveyQuestion::Table, SurveyQuestion::SurveyId)
                            .to(Survey::Table, Survey::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SurveyQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SurveyQuestion {
    Table,
    Id,
    SurveyId,
    QuestionText,
    Kind,
    Choices,
    Position,
}
