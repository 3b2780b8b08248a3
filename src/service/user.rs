use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{RegisterUserDto, Role, UpdateProfileDto, UserDto},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Email addresses are unique; the super admin role cannot be claimed
    /// through self-registration.
    pub async fn register(&self, dto: RegisterUserDto) -> Result<UserDto, AppError> {
        if dto.username.trim().is_empty() {
            return Err(AppError::Validation(
                "Username must not be empty".to_string(),
            ));
        }
        if !dto.email.contains('@') {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid email address",
                dto.email
            )));
        }
        if dto.role == Role::SuperAdmin {
            return Err(AppError::Validation(
                "Cannot self-register as super admin".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        if repo.get_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                dto.email
            )));
        }

        let user = repo
            .create(dto.username, dto.email, dto.role, dto.institution, dto.bio)
            .await?;

        UserDto::from_model(user).map_err(AppError::InternalError)
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        UserDto::from_model(user).map_err(AppError::InternalError)
    }

    /// Lists all reviewer-role accounts, for the assignment picker.
    pub async fn list_reviewers(&self) -> Result<Vec<UserDto>, AppError> {
        let reviewers = UserRepository::new(self.db)
            .list_by_role(Role::Reviewer)
            .await?;

        reviewers
            .into_iter()
            .map(|u| UserDto::from_model(u).map_err(AppError::InternalError))
            .collect()
    }

    pub async fn update_profile(
        &self,
        current_user: entity::user::Model,
        dto: UpdateProfileDto,
    ) -> Result<UserDto, AppError> {
        if let Some(username) = &dto.username {
            if username.trim().is_empty() {
                return Err(AppError::Validation(
                    "Username must not be empty".to_string(),
                ));
            }
        }

        let updated = UserRepository::new(self.db)
            .update_profile(current_user, dto)
            .await?;

        UserDto::from_model(updated).map_err(AppError::InternalError)
    }
}
