use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Certificate category derived from how the user took part in the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    Participation,
    Presentation,
    Committee,
    Organization,
}

impl CertificateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateKind::Participation => "participation",
            CertificateKind::Presentation => "presentation",
            CertificateKind::Committee => "committee",
            CertificateKind::Organization => "organization",
        }
    }
}

impl FromStr for CertificateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "participation" => Ok(CertificateKind::Participation),
            "presentation" => Ok(CertificateKind::Presentation),
            "committee" => Ok(CertificateKind::Committee),
            "organization" => Ok(CertificateKind::Organization),
            other => Err(format!("unknown certificate kind '{}'", other)),
        }
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CertificateDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub kind: CertificateKind,
    pub generated_at: DateTime<Utc>,
}

impl CertificateDto {
    pub fn from_model(certificate: entity::certificate::Model) -> Result<Self, String> {
        let kind = certificate.kind.parse::<CertificateKind>()?;
        Ok(Self {
            id: certificate.id,
            event_id: certificate.event_id,
            user_id: certificate.user_id,
            kind,
            generated_at: certificate.generated_at,
        })
    }
}

/// Result of a certificate generation pass. Generation is get-or-create per
/// (event, user, kind), so re-running reports `existing` instead of creating
/// duplicates.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateCertificatesOutcomeDto {
    pub event_id: i32,
    pub created: u64,
    pub existing: u64,
}
