use crate::data::workshop::WorkshopRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod participants;
