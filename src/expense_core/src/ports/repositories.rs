use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up the unique user registered under `email`.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;

    /// Persist a new user and commit it before returning.
    ///
    /// Returns `UserAlreadyExists` if the email is taken at write time.
    async fn insert(&self, user: NewUser) -> Result<User, UserStoreError>;
}
