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
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(pk_auto(Certificate::Id))
                    .col(integer(Certificate::EventId))
                    .col(integer(Certificate::UserId))
                    .col(string(Certificate::Kind))
                    .col(
                        timestamp(Certificate::GeneratedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_event_id")
                            .from(Certificate::Table, Certificate::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_user_id")
                            .from(Certificate::Table, Certificate::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // get-or-create key
        manager
            .create_index(
                Index::create()
                    .name("idx_certificate_event_user_kind_unique")
                    .table(Certificate::Table)
                    .col(Certificate::EventId)
                    .col(Certificate::UserId)
                    .col(Certificate::Kind)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Certificate {
    Table,
    Id,
    EventId,
    UserId,
    Kind,
    GeneratedAt,
}
