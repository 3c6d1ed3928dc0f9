use expense_core::{
    Email, NewUser, Password, PasswordHasher, PasswordHasherError, User, UserName, UserStore,
    UserStoreError,
};

/// Error types specific to register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email is already in use")]
    EmailInUse,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<UserStoreError> for RegisterError {
    fn from(error: UserStoreError) -> Self {
        match error {
            // A concurrent registration won the race between lookup and insert
            UserStoreError::UserAlreadyExists => RegisterError::EmailInUse,
            e => RegisterError::UserStoreError(e),
        }
    }
}

/// Register use case - creates a new user account
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, must not belong to an existing user
    /// * `password` - Plaintext password, hashed before it reaches the store
    ///
    /// # Returns
    /// The persisted user including its store-assigned id, or
    /// `RegisterError::EmailInUse` if the email is taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        name: UserName,
        email: Email,
        password: Password,
    ) -> Result<User, RegisterError> {
        if self.user_store.find_by_email(&email).await?.is_some() {
            tracing::info!("Registration rejected, email already in use");
            return Err(RegisterError::EmailInUse);
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let user = self
            .user_store
            .insert(NewUser::new(name, email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id(), "User registered");
        Ok(user)
    }
}
