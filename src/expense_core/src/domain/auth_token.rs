use secrecy::{ExposeSecret, Secret};

/// Signed session token handed to a client after a successful login.
#[derive(Debug, Clone)]
pub struct AuthToken(Secret<String>);

impl AuthToken {
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
