use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Event lifecycle status. Submissions are only accepted while the call is
/// open; certificates are only generated once the event has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    OpenCall,
    Reviewing,
    ProgramReady,
    Ongoing,
    Completed,
    Archived,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::OpenCall => "open_call",
            EventStatus::Reviewing => "reviewing",
            EventStatus::ProgramReady => "program_ready",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Archived => "archived",
        }
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "open_call" => Ok(EventStatus::OpenCall),
            "reviewing" => Ok(EventStatus::Reviewing),
            "program_ready" => Ok(EventStatus::ProgramReady),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            "archived" => Ok(EventStatus::Archived),
            other => Err(format!("unknown event status '{}'", other)),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub theme: Option<String>,
    pub status: EventStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub city: Option<String>,
    pub country: Option<String>,
    pub organizer_id: i32,
}

impl EventDto {
    pub fn from_model(event: entity::event::Model) -> Result<Self, String> {
        let status = event.status.parse::<EventStatus>()?;
        Ok(Self {
            id: event.id,
            title: event.title,
            theme: event.theme,
            status,
            start_date: event.start_date,
            end_date: event.end_date,
            city: event.city,
            country: event.country,
            organizer_id: event.organizer_id,
        })
    }
}

/// Full event view with organizer, committee and per-event counts.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventDetailDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub theme: Option<String>,
    pub status: EventStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub submission_deadline: Option<NaiveDate>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub organizer: UserDto,
    pub scientific_committee: Vec<UserDto>,
    pub submissions_count: u64,
    pub registrations_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub theme: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub submission_deadline: Option<NaiveDate>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub status: Option<EventStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub submission_deadline: Option<NaiveDate>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConferenceSessionDto {
    pub id: i32,
    pub event_id: i32,
    pub title: String,
    pub session_type: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: Option<String>,
    pub chair_id: Option<i32>,
}

impl From<entity::conference_session::Model> for ConferenceSessionDto {
    fn from(session: entity::conference_session::Model) -> Self {
        Self {
            id: session.id,
            event_id: session.event_id,
            title: session.title,
            session_type: session.session_type,
            date: session.date,
            start_time: session.start_time,
            end_time: session.end_time,
            room: session.room,
            chair_id: session.chair_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateConferenceSessionDto {
    pub title: String,
    pub session_type: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: Option<String>,
    pub chair_id: Option<i32>,
}
