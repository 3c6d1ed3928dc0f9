pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    auth_token::AuthToken,
    email::Email,
    password::{HashedPassword, Password},
    user::{NewUser, User, UserError},
    user_id::UserId,
    user_name::UserName,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenIssuer, TokenIssuerError},
};
