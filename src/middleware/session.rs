//! Type-safe session wrapper.
//!
//! Session access goes through `AuthSession` instead of raw string keys so the
//! key and value type live in one place.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session state: the logged-in user's id.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id, establishing a logged-in session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(user_id))`: User is logged in
    /// - `Ok(None)`: No user in session
    /// - `Err(AppError::SessionErr(_))`: Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
