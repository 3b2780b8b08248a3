use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkshopDto {
    pub id: i32,
    pub event_id: i32,
    pub title: String,
    pub description: String,
    pub leader_id: Option<i32>,
    pub date: NaiveDate,
    pub capacity: i32,
    pub participants_count: u64,
    pub available_seats: i64,
}

impl WorkshopDto {
    pub fn from_model(workshop: entity::workshop::Model, participants_count: u64) -> Self {
        let available_seats = i64::from(workshop.capacity) - participants_count as i64;
        Self {
            id: workshop.id,
            event_id: workshop.event_id,
            title: workshop.title,
            description: workshop.description,
            leader_id: workshop.leader_id,
            date: workshop.date,
            capacity: workshop.capacity,
            participants_count,
            available_seats,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWorkshopDto {
    pub title: String,
    pub description: String,
    pub leader_id: Option<i32>,
    pub date: NaiveDate,
    pub capacity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWorkshopDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub leader_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub capacity: Option<i32>,
}
