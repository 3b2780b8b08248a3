use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Survey::Table)
                    .if_not_exists()
                    .col(pk_auto(Survey::Id))
                    .col(integer(Survey::EventId))
                    .col(string(Survey::Title))
                    .col(text_null(Survey::Description))
                    .col(boolean(Survey::IsActive).default(true))
                    .col(
                        timestamp(Survey::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_survey_event_id")
                            .from(Survey::Table, Survey::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Survey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Survey {
    Table,
    Id,
    EventId,
    Title,
    Description,
    IsActive,
    CreatedAt,
}
