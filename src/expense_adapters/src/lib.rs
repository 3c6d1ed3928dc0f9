//! Infrastructure adapters for the expense tracker auth API.
//!
//! Implements the ports declared in `expense_core` (Postgres and in-memory
//! user stores, argon2 password hashing, JWT issuance) and exposes the axum
//! routes that drive the application use cases.

pub mod config;
pub mod http;
pub mod password;
pub mod persistence;
pub mod token;
