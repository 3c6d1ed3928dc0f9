use expense_core::{
    AuthToken, Email, Password, PasswordHasher, PasswordHasherError, TokenIssuer,
    TokenIssuerError, UserStore, UserStoreError,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid user credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
}

/// Login use case - exchanges email and password for a session token
pub struct LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - Email the account was registered with
    /// * `password` - Plaintext password to check against the stored hash
    ///
    /// # Returns
    /// A token for the user's id, or `LoginError::InvalidCredentials` for both an
    /// unknown email and a wrong password
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<AuthToken, LoginError> {
        let Some(user) = self.user_store.find_by_email(&email).await? else {
            // Same hashing cost as a wrong password; the outcome is irrelevant
            let dummy_hash = self.password_hasher.dummy_hash();
            if let Err(e) = self.password_hasher.verify(&password, &dummy_hash).await {
                tracing::debug!(error = %e, "Dummy hash verification failed");
            }
            tracing::warn!("Rejected login attempt");
            return Err(LoginError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify(&password, user.password_hash())
            .await?;

        if !matches {
            tracing::warn!("Rejected login attempt");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.token_issuer.generate_token(user.id())?;
        tracing::info!(user_id = %user.id(), "User logged in");

        Ok(token)
    }
}
