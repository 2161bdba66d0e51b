//! 用户存储操作

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::SeaOrmStorage;
use crate::entity::users;
use crate::errors::Result;
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UpdateUserRequest},
};

impl SeaOrmStorage {
    pub(crate) async fn create_user_impl(&self, user: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        // password 字段在服务层已完成哈希
        let active = users::ActiveModel {
            username: Set(user.username),
            password_hash: Set(user.password),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            role: Set(user.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.db).await?;
        Ok(model.into_user())
    }

    pub(crate) async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id).one(&self.db).await?;
        Ok(user.map(|u| u.into_user()))
    }

    pub(crate) async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(user.map(|u| u.into_user()))
    }

    pub(crate) async fn list_users_impl(&self) -> Result<Vec<User>> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| m.into_user()).collect())
    }

    pub(crate) async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = users::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: users::ActiveModel = existing.into();
        if let Some(password_hash) = update.password {
            active.password_hash = Set(password_hash);
        }
        if let Some(first_name) = update.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(role) = update.role {
            active.role = Set(role.to_string());
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let model = active.update(&self.db).await?;
        Ok(Some(model.into_user()))
    }

    pub(crate) async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = users::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub(crate) async fn count_users_impl(&self) -> Result<u64> {
        let count = users::Entity::find().count(&self.db).await?;
        Ok(count)
    }
}
