use crate::{
    data::review::ReviewRepository,
    model::review::{ReviewScores, ReviewerDecision},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list_by_submission;
