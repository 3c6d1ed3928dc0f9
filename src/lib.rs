//! # Expense Tracker - Auth API Library
//!
//! This is a facade crate that re-exports all public APIs from the auth API components.
//! Use this crate to get access to registration and login in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! expense_tracker = { path = "../expense_tracker" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, etc.
//! - **Port traits**: `UserStore`, `PasswordHasher`, `TokenIssuer`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `Argon2PasswordHasher`, `JwtTokenIssuer`
//! - **Service**: `AuthService` - The main entry point for the HTTP API

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use expense_core::*;
}

// Re-export most commonly used core types at the root level
pub use expense_core::{
    AuthToken, Email, HashedPassword, NewUser, Password, User, UserError, UserId, UserName,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use expense_core::{
        PasswordHasher, PasswordHasherError, TokenIssuer, TokenIssuerError, UserStore,
        UserStoreError,
    };
}

pub use ports::{PasswordHasher, TokenIssuer, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use expense_application::*;
}

pub use expense_application::{LoginError, LoginUseCase, RegisterError, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use expense_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use expense_adapters::persistence::*;
    }

    /// Password hashing
    pub mod password {
        pub use expense_adapters::password::*;
    }

    /// JWT issuance
    pub mod token {
        pub use expense_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use expense_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use expense_adapters::{
    config::Settings,
    password::Argon2PasswordHasher,
    persistence::{HashMapUserStore, PostgresUserStore},
    token::{JwtAuthConfig, JwtTokenIssuer},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use expense_api::{AuthService, configure_postgresql, get_postgres_pool, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
