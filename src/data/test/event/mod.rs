use crate::{
    data::event::EventRepository,
    model::event::{CreateConferenceSessionDto, CreateEventDto, EventStatus},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_committee_member;
mod create_session;
mod list_by_organizer;
mod set_status;
