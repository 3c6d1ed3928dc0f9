use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use expense_core::{Email, NewUser, User, UserId, UserStore, UserStoreError};

/// In-memory user store, keyed by email.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let user = user.with_id(UserId::new());
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }
}
