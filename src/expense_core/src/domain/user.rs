use thiserror::Error;

use crate::domain::{email::Email, password::HashedPassword, user_id::UserId, user_name::UserName};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
}

/// A user record that has not been persisted yet.
///
/// Carries the password hash only; plaintext never reaches a `UserStore`.
#[derive(Debug, Clone)]
pub struct NewUser {
    name: UserName,
    email: Email,
    password_hash: HashedPassword,
}

impl NewUser {
    pub fn new(name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

/// A persisted user record.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    password_hash: HashedPassword,
}

impl User {
    pub fn new(id: UserId, name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
}
