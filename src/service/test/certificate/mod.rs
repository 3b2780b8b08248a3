use crate::{
    error::{auth::AuthError, AppError},
    service::certificate::CertificateService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod generate_for_event;
