//! Axum route handlers for the `/api/auth` endpoints.

pub mod error;
pub mod login;
pub mod register;

pub use error::{AuthApiError, ErrorResponse};
pub use login::{LoginRequest, TokenResponse, login};
pub use register::{RegisterRequest, UserResponse, register};
