use crate::{error::AppError, service::workshop::WorkshopService};
use test_utils::{builder::TestBuilder, factory};

mod join;
