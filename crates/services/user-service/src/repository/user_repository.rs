//! User store trait and its PostgreSQL implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use thiserror::Error;
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failure reported by a store. Absence of a record is not an error, lookups
/// return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Storage error: {0}")]
    Unexpected(String),
}

impl StoreError {
    pub fn unexpected(msg: impl Into<String>) -> Self {
        StoreError::Unexpected(msg.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// User store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; the store assigns the id
    async fn create(&self, user: NewUser) -> StoreResult<User>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Replace the mutable fields of an existing user
    async fn update(&self, user: &User) -> StoreResult<()>;

    /// Permanently remove a user
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}

/// PostgreSQL-backed user store
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        // created_at is written once on insert
        let active = ActiveModel {
            id: Unchanged(user.id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: NotSet,
            updated_at: Set(user.updated_at),
        };

        active.update(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
