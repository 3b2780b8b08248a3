use crate::{
    data::submission::SubmissionRepository,
    model::submission::{CreateSubmissionDto, SubmissionKind, SubmissionStatus},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_reviewer;
mod create;
mod list_assigned_to_reviewer;
