//! HTTP service for the expense tracker's `/api/auth` endpoints.
//!
//! Assembles the axum router from the adapters in `expense_adapters`, and
//! provides the Postgres and tracing setup used by the `expense-api` binary.

pub mod auth_service;
pub mod helpers;
pub mod telemetry;

pub use auth_service::AuthService;
pub use helpers::{configure_postgresql, get_postgres_pool};
pub use telemetry::init_tracing;
