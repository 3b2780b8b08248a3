use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Account role as exposed by the identity directory.
///
/// Roles are capabilities, not free-form strings: permission checks go through
/// `AuthGuard` with named `Permission` variants rather than ad-hoc string
/// comparisons scattered across handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Organizer,
    Author,
    Reviewer,
    Committee,
    Participant,
    Speaker,
    WorkshopLeader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Organizer => "organizer",
            Role::Author => "author",
            Role::Reviewer => "reviewer",
            Role::Committee => "committee",
            Role::Participant => "participant",
            Role::Speaker => "speaker",
            Role::WorkshopLeader => "workshop_leader",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "organizer" => Ok(Role::Organizer),
            "author" => Ok(Role::Author),
            "reviewer" => Ok(Role::Reviewer),
            "committee" => Ok(Role::Committee),
            "participant" => Ok(Role::Participant),
            "speaker" => Ok(Role::Speaker),
            "workshop_leader" => Ok(Role::WorkshopLeader),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub institution: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    /// Converts an entity model, failing on a role value the directory does
    /// not recognize.
    pub fn from_model(user: entity::user::Model) -> Result<Self, String> {
        let role = user.role.parse::<Role>()?;
        Ok(Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role,
            institution: user.institution,
            bio: user.bio,
            created_at: user.created_at,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub institution: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub institution: Option<String>,
    pub bio: Option<String>,
}

/// Login payload. Credential verification belongs to the identity provider;
/// this backend only resolves the account and establishes the session.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
}
