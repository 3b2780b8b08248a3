use crate::{data::certificate::CertificateRepository, model::certificate::CertificateKind};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
