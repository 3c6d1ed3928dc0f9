//! Hand-written port doubles shared by the use case tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use expense_core::{
    AuthToken, Email, HashedPassword, NewUser, Password, PasswordHasher, PasswordHasherError,
    TokenIssuer, TokenIssuerError, User, UserId, UserName, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};

/// Records inserted users. Uniqueness is left to the use case's lookup.
#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserStore {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email() == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserStoreError> {
        let user = user.with_id(UserId::new());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

/// Store that never finds anyone and always loses the insert race.
#[derive(Clone, Default)]
pub struct RacingUserStore;

#[async_trait]
impl UserStore for RacingUserStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(None)
    }

    async fn insert(&self, _user: NewUser) -> Result<User, UserStoreError> {
        Err(UserStoreError::UserAlreadyExists)
    }
}

#[derive(Clone, Default)]
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_string()))
    }

    async fn insert(&self, _user: NewUser) -> Result<User, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_string()))
    }
}

/// Reversible "hash" so tests stay fast and deterministic.
#[derive(Clone, Default)]
pub struct MockPasswordHasher;

const HASH_PREFIX: &str = "hashed:";

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        Ok(HashedPassword::new(Secret::from(format!(
            "{HASH_PREFIX}{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let stored = expected
            .as_ref()
            .expose_secret()
            .strip_prefix(HASH_PREFIX)
            .ok_or_else(|| PasswordHasherError::MalformedHash("missing prefix".to_string()))?;
        Ok(stored == password.as_ref().expose_secret())
    }

    fn dummy_hash(&self) -> HashedPassword {
        HashedPassword::new(Secret::from(format!("{HASH_PREFIX}\0")))
    }
}

/// Counts verifications, otherwise behaves like `MockPasswordHasher`.
#[derive(Clone, Default)]
pub struct CountingPasswordHasher {
    verifications: Arc<AtomicUsize>,
}

impl CountingPasswordHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        MockPasswordHasher.hash(password).await
    }

    async fn verify(
        &self,
        password: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        MockPasswordHasher.verify(password, expected).await
    }

    fn dummy_hash(&self) -> HashedPassword {
        MockPasswordHasher.dummy_hash()
    }
}

#[derive(Clone, Default)]
pub struct MockTokenIssuer;

impl TokenIssuer for MockTokenIssuer {
    fn generate_token(&self, user_id: &UserId) -> Result<AuthToken, TokenIssuerError> {
        Ok(AuthToken::new(format!("token-for-{user_id}")))
    }
}

pub fn email(value: &str) -> Email {
    Email::try_from(Secret::from(value.to_string())).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::from(value.to_string())).unwrap()
}

pub fn name(value: &str) -> UserName {
    UserName::try_from(value.to_string()).unwrap()
}

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}
