use chrono::Utc;
use expense_core::{AuthToken, TokenIssuer, TokenIssuerError, UserId};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
    pub issuer: String,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Issues HS256-signed JWTs whose subject is the user id.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtAuthConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    /// Decode and validate a token produced by this issuer.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenAuthError> {
        validate_auth_token(token, &self.config)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn generate_token(&self, user_id: &UserId) -> Result<AuthToken, TokenIssuerError> {
        generate_auth_token(user_id, &self.config)
            .map(AuthToken::new)
            .map_err(|e| TokenIssuerError::IssueFailed(e.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: usize,
    pub exp: usize,
}

// Create JWT auth token
pub fn generate_auth_token(user_id: &UserId, config: &JwtAuthConfig) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(config.token_ttl_in_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let now = Utc::now();
    let exp = now
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    // Claims carry timestamps as usize
    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;
    let iat: usize = now
        .timestamp()
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        iss: config.issuer.clone(),
        iat,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.as_bytes()),
    )
    .map_err(TokenAuthError::TokenError)
}

// Check signature, expiry and issuer
pub fn validate_auth_token(token: &str, config: &JwtAuthConfig) -> Result<Claims, TokenAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.as_str()]);

    decode::<Claims>(token, &DecodingKey::from_secret(config.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(TokenAuthError::TokenError)
}
