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
                    .table(ConferenceSession::Table)
                    .if_not_exists()
                    .col(pk_auto(ConferenceSession::Id))
                    .col(integer(ConferenceSession::EventId))
                    .col(string(ConferenceSession::Title))
                    .col(string(ConferenceSession::SessionType))
                    .col(date(ConferenceSession::Date))
                    .col(time(ConferenceSession::StartTime))
                    .col(time(ConferenceSession::EndTime))
                    .col(string_null(ConferenceSession::Room))
                    .col(integer_null(ConferenceSession::ChairId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conference_session_event_id")
                            .from(ConferenceSession::Table, ConferenceSession::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conference_session_chair_id")
                            .from(ConferenceSession::Table, ConferenceSession::ChairId)
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
            .drop_table(Table::drop().table(ConferenceSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConferenceSession {
    Table,
    Id,
    EventId,
    Title,
    SessionType,
    Date,
    StartTime,
    EndTime,
    Room,
    ChairId,
}
