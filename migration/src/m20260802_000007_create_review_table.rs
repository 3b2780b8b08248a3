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
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::SubmissionId))
                    .col(integer(Review::ReviewerId))
                    .col(integer(Review::RelevanceScore))
                    .col(integer(Review::QualityScore))
                    .col(integer(Review::OriginalityScore))
                    .col(text(Review::Comments))
                    .col(string(Review::Decision))
                    .col(
                        timestamp(Review::ReviewedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_submission_id")
                            .from(Review::Table, Review::SubmissionId)
                            .to(Submission::Table, Submission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_reviewer_id")
                            .from(Review::Table, Review::ReviewerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per (submission, reviewer); the intake path also checks
        // this inside its transaction, the index backs it at the schema level.
        manager
            .create_index(
                Index::create()
                    .name("idx_review_submission_reviewer_unique")
                    .table(Review::Table)
                    .col(Review::SubmissionId)
                    .col(Review::ReviewerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    SubmissionId,
    ReviewerId,
    RelevanceScore,
    QualityScore,
    OriginalityScore,
    Comments,
    Decision,
    ReviewedAt,
}
