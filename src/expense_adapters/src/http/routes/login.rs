use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use expense_application::LoginUseCase;
use expense_core::{Email, Password, PasswordHasher, TokenIssuer, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State((user_store, password_hasher, token_issuer)): State<(U, H, T)>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(&user_store, &password_hasher, &token_issuer);
    let token = use_case.execute(email, password).await?;

    Ok((
        StatusCode::OK,
        Json(TokenResponse {
            token: token.expose().to_owned(),
        }),
    ))
}
