use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    auth_token::AuthToken,
    password::{HashedPassword, Password},
    user_id::UserId,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Port trait for one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError>;

    /// Returns `Ok(false)` when the password does not match the hash.
    async fn verify(
        &self,
        password: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHasherError>;

    /// A well-formed hash no password verifies against. Verifying it costs the
    /// same as verifying a stored hash.
    fn dummy_hash(&self) -> HashedPassword;
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Failed to issue token: {0}")]
    IssueFailed(String),
}

/// Port trait for minting session tokens
pub trait TokenIssuer: Send + Sync {
    fn generate_token(&self, user_id: &UserId) -> Result<AuthToken, TokenIssuerError>;
}
