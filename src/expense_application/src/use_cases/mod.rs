pub mod login;
pub mod register;

// Re-export for convenience
pub use login::{LoginError, LoginUseCase};
pub use register::{RegisterError, RegisterUseCase};
