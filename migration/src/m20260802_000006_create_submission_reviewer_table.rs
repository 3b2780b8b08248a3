use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User,
    m20260802_000005_create_submission_table::Submission,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubmissionReviewer::Table)
                    .if_not_exists()
                    .col(pk_auto(SubmissionReviewer::Id))
                    .col(integer(SubmissionReviewer::SubmissionId))
                    .col(integer(SubmissionReviewer::ReviewerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_reviewer_submission_id")
                            .from(SubmissionReviewer::Table, SubmissionReviewer::SubmissionId)
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_reviewer_reviewer_id")
                            .from(SubmissionReviewer::Table, SubmissionReviewer::ReviewerId)
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
                    .name("idx_submission_reviewer_unique")
                    .table(SubmissionReviewer::Table)
                    .col(SubmissionReviewer::SubmissionId)
                    .col(SubmissionReviewer::ReviewerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubmissionReviewer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubmissionReviewer {
    Table,
    Id,
    SubmissionId,
    ReviewerId,
}
