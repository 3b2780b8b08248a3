use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{event::EventRepository, registration::RegistrationRepository},
    error::{auth::AuthError, AppError},
    model::{
        event::EventStatus,
        registration::{CreateRegistrationDto, RegistrationDto, UpdatePaymentStatusDto},
        user::Role,
    },
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers the current user for an event, payment pending.
    ///
    /// Registration is open from the call opening until the event ends; draft,
    /// completed and archived events reject it. A user registers at most once
    /// per event.
    pub async fn register(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        dto: CreateRegistrationDto,
    ) -> Result<RegistrationDto, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let status = event
            .status
            .parse::<EventStatus>()
            .map_err(AppError::InternalError)?;
        let open = matches!(
            status,
            EventStatus::OpenCall
                | EventStatus::Reviewing
                | EventStatus::ProgramReady
                | EventStatus::Ongoing
        );
        if !open {
            return Err(AppError::Validation(format!(
                "Event {} is not open for registration",
                event_id
            )));
        }

        let txn = self.db.begin().await?;

        let repo = RegistrationRepository::new(&txn);

        if repo
            .get_by_event_and_user(event_id, current_user.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Already registered for event {}",
                event_id
            )));
        }

        let registration = repo.create(event_id, current_user.id, dto.kind).await?;

        txn.commit().await?;

        RegistrationDto::from_model(registration).map_err(AppError::InternalError)
    }

    /// Lists an event's registrations. Restricted to the event's organizer or
    /// a super admin.
    pub async fn list_by_event(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
    ) -> Result<Vec<RegistrationDto>, AppError> {
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

        let registrations = RegistrationRepository::new(self.db)
            .list_by_event(event_id)
            .await?;

        registrations
            .into_iter()
            .map(|r| RegistrationDto::from_model(r).map_err(AppError::InternalError))
            .collect()
    }

    /// Lists the current user's registrations.
    pub async fn list_mine(
        &self,
        current_user: &entity::user::Model,
    ) -> Result<Vec<RegistrationDto>, AppError> {
        let registrations = RegistrationRepository::new(self.db)
            .list_by_user(current_user.id)
            .await?;

        registrations
            .into_iter()
            .map(|r| RegistrationDto::from_model(r).map_err(AppError::InternalError))
            .collect()
    }

    /// Updates a registration's payment status. Restricted to the event's
    /// organizer or a super admin.
    pub async fn set_payment_status(
        &self,
        current_user: &entity::user::Model,
        registration_id: i32,
        dto: UpdatePaymentStatusDto,
    ) -> Result<RegistrationDto, AppError> {
        let repo = RegistrationRepository::new(self.db);

        let registration = repo.get_by_id(registration_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Registration {} not found", registration_id))
        })?;

        let event = EventRepository::new(self.db)
            .get_by_id(registration.event_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Event {} not found", registration.event_id))
            })?;

        if current_user.role != Role::SuperAdmin.as_str() && event.organizer_id != current_user.id {
            return Err(AuthError::NotEventOrganizer {
                user_id: current_user.id,
                event_id: event.id,
            }
            .into());
        }

        let updated = repo
            .set_payment_status(registration, dto.payment_status)
            .await?;

        RegistrationDto::from_model(updated).map_err(AppError::InternalError)
    }
}
