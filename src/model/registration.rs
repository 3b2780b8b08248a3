use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationKind {
    Participant,
    Author,
    Speaker,
    Guest,
}

impl RegistrationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationKind::Participant => "participant",
            RegistrationKind::Author => "author",
            RegistrationKind::Speaker => "speaker",
            RegistrationKind::Guest => "guest",
        }
    }
}

impl FromStr for RegistrationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "participant" => Ok(RegistrationKind::Participant),
            "author" => Ok(RegistrationKind::Author),
            "speaker" => Ok(RegistrationKind::Speaker),
            "guest" => Ok(RegistrationKind::Guest),
            other => Err(format!("unknown registration kind '{}'", other)),
        }
    }
}

impl fmt::Display for RegistrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    PaidOnline,
    PaidOnsite,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::PaidOnline => "paid_online",
            PaymentStatus::PaidOnsite => "paid_onsite",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid_online" => Ok(PaymentStatus::PaidOnline),
            "paid_onsite" => Ok(PaymentStatus::PaidOnsite),
            other => Err(format!("unknown payment status '{}'", other)),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub kind: RegistrationKind,
    pub payment_status: PaymentStatus,
    pub registered_at: DateTime<Utc>,
}

impl RegistrationDto {
    pub fn from_model(registration: entity::registration::Model) -> Result<Self, String> {
        let kind = registration.kind.parse::<RegistrationKind>()?;
        let payment_status = registration.payment_status.parse::<PaymentStatus>()?;
        Ok(Self {
            id: registration.id,
            event_id: registration.event_id,
            user_id: registration.user_id,
            kind,
            payment_status,
            registered_at: registration.registered_at,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRegistrationDto {
    pub kind: RegistrationKind,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusDto {
    pub payment_status: PaymentStatus,
}
