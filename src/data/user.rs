use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::prelude::User;

use crate::model::user::{Role, UpdateProfileDto};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        UserRepository { db }
    }

    pub async fn create(
        &self,
        username: String,
        email: String,
        role: Role,
        institution: Option<String>,
        bio: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            role: ActiveValue::Set(role.to_string()),
            institution: ActiveValue::Set(institution),
            bio: ActiveValue::Set(bio),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        User::insert(user).exec_with_returning(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        User::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::user::Model>, DbErr> {
        User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<entity::user::Model>, DbErr> {
        User::find()
            .filter(entity::user::Column::Role.eq(role.to_string()))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await
    }

    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        params: UpdateProfileDto,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();

        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(institution) = params.institution {
            active.institution = ActiveValue::Set(Some(institution));
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }

        active.update(self.db).await
    }
}
