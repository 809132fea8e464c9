//! User service - validation, hashing and uniqueness around the user store.
//!
//! Every store or hashing failure is logged here and returned as
//! `AppError::Internal`, so callers only ever see the closed message set.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    validate_user, Clock, CreateUser, DomainError, NewUser, Password, SystemClock,
    UpdateEmail, UpdatePassword, UpdateUser, User,
};

use crate::repository::{StoreError, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate, hash and persist a new user. Returns the stored record.
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Change first and/or last name. Empty values are ignored.
    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User>;

    async fn update_password(&self, id: Uuid, update: UpdatePassword) -> AppResult<()>;

    async fn update_email(&self, id: Uuid, update: UpdateEmail) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Log a store failure and collapse it.
fn internal(context: &'static str, err: StoreError) -> AppError {
    error!(error = %err, "{}", context);
    AppError::Internal
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Service stamping records with wall-clock time
    pub fn with_system_clock(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(repo, Arc::new(SystemClock))
    }

    async fn load(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| internal("failed to get user", e))?
            .ok_or_not_found()
    }

    /// Fails with `EmailTaken` when a user other than `owner` holds `email`.
    async fn ensure_email_available(&self, email: &str, owner: Option<Uuid>) -> AppResult<()> {
        let existing = self
            .repo
            .find_by_email(email)
            .await
            .map_err(|e| internal("failed to check for existing user", e))?;

        match existing {
            Some(user) if Some(user.id) != owner => Err(AppError::EmailTaken),
            _ => Ok(()),
        }
    }

    async fn persist(&self, user: &User) -> AppResult<()> {
        self.repo
            .update(user)
            .await
            .map_err(|e| internal("failed to update user", e))
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let now = self.clock.now();

        validate_user(&input)?;
        let password = Password::hash(&input.password)?;
        self.ensure_email_available(&input.email, None).await?;

        let new_user = NewUser {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password_hash: password.into_string(),
            created_at: now,
            updated_at: now,
        };

        let user = self
            .repo
            .create(new_user)
            .await
            .map_err(|e| internal("failed to create user", e))?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.load(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo
            .find_by_email(email)
            .await
            .map_err(|e| internal("failed to get user", e))?
            .ok_or_not_found()
    }

    async fn update_user(&self, id: Uuid, update: UpdateUser) -> AppResult<User> {
        let mut user = self.load(id).await?;

        user.apply_names(update);
        user.touch(self.clock.now());
        self.persist(&user).await?;

        Ok(user)
    }

    async fn update_password(&self, id: Uuid, update: UpdatePassword) -> AppResult<()> {
        let mut user = self.load(id).await?;

        if update.password.is_empty() {
            return Err(DomainError::PasswordRequired.into());
        }

        let password = Password::hash(&update.password)?;
        user.set_password_hash(password.into_string());
        user.touch(self.clock.now());
        self.persist(&user).await?;

        info!(user_id = %id, "password changed");
        Ok(())
    }

    async fn update_email(&self, id: Uuid, update: UpdateEmail) -> AppResult<User> {
        let mut user = self.load(id).await?;

        if update.email.is_empty() {
            return Err(DomainError::EmailRequired.into());
        }

        self.ensure_email_available(&update.email, Some(id)).await?;

        user.set_email(update.email);
        user.touch(self.clock.now());
        self.persist(&user).await?;

        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.load(id).await?;

        self.repo
            .delete(id)
            .await
            .map_err(|e| internal("failed to delete user", e))?;

        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
