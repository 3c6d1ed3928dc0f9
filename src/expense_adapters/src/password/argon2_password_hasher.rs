use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use expense_core::{HashedPassword, Password, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

const DEFAULT_MEMORY_COST_KIB: u32 = 15000;
const DEFAULT_ITERATIONS: u32 = 2;
const DEFAULT_PARALLELISM: u32 = 1;

// Fixed salt and an all-zero 32 byte output, both B64 without padding
const DUMMY_SALT: &str = "bm8tc3VjaC1hY2NvdW50IQ";
const DUMMY_OUTPUT: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Argon2id password hasher.
///
/// Hashing and verification run on the blocking pool. Verification reads the
/// parameters embedded in the stored PHC string, so hashes produced with other
/// costs still verify.
#[derive(Debug, Clone, Copy)]
pub struct Argon2PasswordHasher {
    memory_cost: u32,
    iterations: u32,
    parallelism: u32,
}

impl Argon2PasswordHasher {
    pub fn new(memory_cost: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            iterations,
            parallelism,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, password_hash::Error> {
        let params = Params::new(self.memory_cost, self.iterations, self.parallelism, None)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_COST_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        let hasher = *self;
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher
                    .argon2()
                    .and_then(|argon2| {
                        argon2.hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    })
                    .map(|hash| HashedPassword::new(Secret::from(hash.to_string())))
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        expected: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let hasher = *self;
        let password = password.clone();
        let expected = expected.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_hash = PasswordHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;
                let argon2 = hasher
                    .argon2()
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?;

                match argon2
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }

    /// PHC string carrying this hasher's own costs, so verifying it takes as
    /// long as verifying a hash this hasher produced.
    fn dummy_hash(&self) -> HashedPassword {
        HashedPassword::new(Secret::from(format!(
            "$argon2id$v=19$m={},t={},p={}${DUMMY_SALT}${DUMMY_OUTPUT}",
            self.memory_cost, self.iterations, self.parallelism
        )))
    }
}
