use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        certificate::CertificateRepository, event::EventRepository,
        registration::RegistrationRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        certificate::{CertificateDto, CertificateKind, GenerateCertificatesOutcomeDto},
        event::EventStatus,
        registration::RegistrationKind,
        user::Role,
    },
};

pub struct CertificateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CertificateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates certificates for a completed event.
    ///
    /// One pass over the event's participation: speaker registrations get a
    /// presentation certificate, every other registrant a participation
    /// certificate, scientific committee members a committee certificate and
    /// the organizer an organization certificate. Generation is get-or-create
    /// per (event, user, kind), so re-running the pass reports existing
    /// certificates instead of duplicating them.
    ///
    /// # Returns
    /// - `Ok(GenerateCertificatesOutcomeDto)`: Created vs. existing counts
    /// - `Err(AppError)`: Event not found, not completed, authorization or
    ///   database error
    pub async fn generate_for_event(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
    ) -> Result<GenerateCertificatesOutcomeDto, AppError> {
        let event_repo = EventRepository::new(self.db);

        let event = event_repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if current_user.role != Role::SuperAdmin.as_str() && event.organizer_id != current_user.id {
            return Err(AuthError::NotEventOrganizer {
                user_id: current_user.id,
                event_id,
            }
            .into());
        }

        let status = event
            .status
            .parse::<EventStatus>()
            .map_err(AppError::InternalError)?;
        if status != EventStatus::Completed {
            return Err(AppError::Validation(format!(
                "Event {} is not completed; certificates can only be generated afterwards",
                event_id
            )));
        }

        let mut grants: Vec<(i32, CertificateKind)> = Vec::new();

        for registration in RegistrationRepository::new(self.db)
            .list_by_event(event_id)
            .await?
        {
            let kind = if registration.kind == RegistrationKind::Speaker.as_str() {
                CertificateKind::Presentation
            } else {
                CertificateKind::Participation
            };
            grants.push((registration.user_id, kind));
        }

        for user_id in event_repo.committee_member_ids(event_id).await? {
            grants.push((user_id, CertificateKind::Committee));
        }

        grants.push((event.organizer_id, CertificateKind::Organization));

        let txn = self.db.begin().await?;

        let certificate_repo = CertificateRepository::new(&txn);

        let mut created = 0;
        let mut existing = 0;

        for (user_id, kind) in grants {
            let (_, was_created) = certificate_repo
                .get_or_create(event_id, user_id, kind)
                .await?;
            if was_created {
                created += 1;
            } else {
                existing += 1;
            }
        }

        txn.commit().await?;

        Ok(GenerateCertificatesOutcomeDto {
            event_id,
            created,
            existing,
        })
    }

    /// Lists the current user's certificates.
    pub async fn list_mine(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<CertificateDto>, AppError> {
        let certificates = CertificateRepository::new(self.db)
            .list_by_user(current_user.id)
            .await?;

        certificates
            .into_iter()
            .map(|c| CertificateDto::from_model(c).map_err(AppError::InternalError))
            .collect()
    }

    /// Lists an event's certificates. Restricted to the event's organizer or
    /// a super admin.
    pub async fn list_by_event(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
    ) -> Result<Vec<CertificateDto>, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if current_user.role != Role::SuperAdmin.as_str() && event.organizer_id != current_user.id {
            return Err(AuthError::NotEventOrganizer {
                user_id: current_user.id,
                event_id,
            }
            .into());
        }

        let certificates = CertificateRepository::new(self.db)
            .list_by_event(event_id)
            .await?;

        certificates
            .into_iter()
            .map(|c| CertificateDto::from_model(c).map_err(AppError::InternalError))
            .collect()
    }
}
