use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use expense_application::RegisterUseCase;
use expense_core::{Email, Password, PasswordHasher, User, UserName, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AuthApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Public representation of a registered user. Carries no password material.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().as_str().to_owned(),
            email: user.email().as_str().to_owned(),
        }
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Json(request) = request?;

    let name = UserName::try_from(request.name)?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = RegisterUseCase::new(&user_store, &password_hasher);
    let user = use_case.execute(name, email, password).await?;

    Ok((StatusCode::OK, Json(UserResponse::from(&user))))
}
