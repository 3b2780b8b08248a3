use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::Role,
};

/// Coarse role requirements checked at the route boundary. Data-dependent
/// rules (event ownership, reviewer assignment) are enforced in the services.
pub enum Permission {
    SuperAdmin,
    /// Organizer-role account, or super admin.
    Organizer,
    /// Reviewer-role account, or super admin.
    Reviewer,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session's user and checks the given permissions.
    ///
    /// # Returns
    /// - `Ok(Model)`: The authenticated user
    /// - `Err(AppError::AuthErr(_))`: Not logged in, stale session or missing
    ///   role
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let role = user
            .role
            .parse::<Role>()
            .map_err(AppError::InternalError)?;

        for permission in permissions {
            match permission {
                Permission::SuperAdmin => {
                    if role != Role::SuperAdmin {
                        return Err(AuthError::RoleRequired {
                            user_id,
                            role: Role::SuperAdmin.to_string(),
                        }
                        .into());
                    }
                }
                Permission::Organizer => {
                    if role != Role::Organizer && role != Role::SuperAdmin {
                        return Err(AuthError::RoleRequired {
                            user_id,
                            role: Role::Organizer.to_string(),
                        }
                        .into());
                    }
                }
                Permission::Reviewer => {
                    if role != Role::Reviewer && role != Role::SuperAdmin {
                        return Err(AuthError::RoleRequired {
                            user_id,
                            role: Role::Reviewer.to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
