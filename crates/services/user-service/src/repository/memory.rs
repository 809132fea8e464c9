//! In-process user store, used by tests and local runs without PostgreSQL.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::user_repository::{StoreError, StoreResult, UserRepository};
use domain::{NewUser, User};

/// `HashMap`-backed store. Mirrors the unique email index of the
/// relational schema so duplicate writes fail at the store as well.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn email_in_use(users: &HashMap<Uuid, User>, email: &str, except: Option<Uuid>) -> bool {
    users
        .values()
        .any(|u| u.email == email && Some(u.id) != except)
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if email_in_use(&users, &user.email, None) {
            return Err(StoreError::unexpected("duplicate key value violates users_email_key"));
        }

        let user = user.into_user(Uuid::new_v4());
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.write().await;
        if email_in_use(&users, &user.email, Some(user.id)) {
            return Err(StoreError::unexpected("duplicate key value violates users_email_key"));
        }

        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| StoreError::unexpected("record not updated"))?;

        let created_at = stored.created_at;
        *stored = User {
            created_at,
            ..user.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.users.write().await.remove(&id);
        Ok(())
    }
}
