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
                    .table(EventCommitteeMember::Table)
                    .if_not_exists()
                    .col(pk_auto(EventCommitteeMember::Id))
                    .col(integer(EventCommitteeMember::EventId))
                    .col(integer(EventCommitteeMember::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_committee_member_event_id")
                            .from(EventCommitteeMember::Table, EventCommitteeMember::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_committee_member_user_id")
                            .from(EventCommitteeMember::Table, EventCommitteeMember::UserId)
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
                    .name("idx_event_committee_member_unique")
                    .table(EventCommitteeMember::Table)
                    .col(EventCommitteeMember::EventId)
                    .col(EventCommitteeMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventCommitteeMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventCommitteeMember {
    Table,
    Id,
    EventId,
    UserId,
}
