use crate::{
    error::{auth::AuthError, AppError},
    model::submission::{OverrideStatusDto, SubmissionStatus},
    service::submission::SubmissionService,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod override_status;
