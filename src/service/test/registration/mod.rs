use crate::{
    error::AppError,
    model::registration::{CreateRegistrationDto, RegistrationKind},
    service::registration::RegistrationService,
};
use test_utils::{builder::TestBuilder, factory};

mod register;
