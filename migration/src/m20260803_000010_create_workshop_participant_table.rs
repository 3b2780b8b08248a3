use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260803_000009_create_workshop_table::Workshop,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkshopParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkshopParticipant::Id))
                    .col(integer(WorkshopParticipant::WorkshopId))
                    .col(integer(WorkshopParticipant::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_participant_workshop_id")
                            .from(WorkshopParticipant::Table, WorkshopParticipant::WorkshopId)
                            .to(Workshop::Table, Workshop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_participant_user_id")
                            .from(WorkshopParticipant::Table, WorkshopParticipant::UserId)
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
                    .name("idx_workshop_participant_unique")
                    .table(WorkshopParticipant::Table)
                    .col(WorkshopParticipant::WorkshopId)
                    .col(WorkshopParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkshopParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkshopParticipant {
    Table,
    Id,
    WorkshopId,
    UserId,
}
