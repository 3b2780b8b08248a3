use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workshop::Table)
                    .if_not_exists()
                    .col(pk_auto(Workshop::Id))
                    .col(integer(Workshop::EventId))
                    .col(string(Workshop::Title))
                    .col(text(Workshop::Description))
                    .col(integer_null(Workshop::LeaderId))
                    .col(date(Workshop::Date))
                    .col(integer(Workshop::Capacity))
                    .col(
                        timestamp(Workshop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_event_id")
                            .from(Workshop::Table, Workshop::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_leader_id")
                            .from(Workshop::Table, Workshop::LeaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workshop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workshop {
    Table,
    Id,
    EventId,
    Title,
    Description,
    LeaderId,
    Date,
    Capacity,
    CreatedAt,
}
