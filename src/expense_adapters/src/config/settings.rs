use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File, Map};
use secrecy::Secret;
use serde::{Deserialize, Deserializer};

use crate::config::constants::{SETTINGS_FILE, defaults, env};
use crate::token::JwtAuthConfig;

/// Service configuration.
///
/// Sources, lowest precedence first: built-in defaults, the optional
/// `config/settings.json`, `APP__<SECTION>__<KEY>` variables, then the
/// conventional `DATABASE_URL`, `JWT_SECRET` and `ALLOWED_ORIGINS` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
    pub issuer: String,
}

impl From<&JwtSettings> for JwtAuthConfig {
    fn from(settings: &JwtSettings) -> Self {
        JwtAuthConfig {
            jwt_secret: settings.secret.clone(),
            token_ttl_in_seconds: settings.time_to_live,
            issuer: settings.issuer.clone(),
        }
    }
}

impl Settings {
    /// Load settings from `.env`, the process environment and the optional settings file.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        Self::from_vars(std::env::vars().collect())
    }

    /// Build settings from an explicit set of environment variables.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let var = |key: &str| vars.get(key).cloned();

        Config::builder()
            .set_default("application.host", defaults::HOST)?
            .set_default("application.port", i64::from(defaults::PORT))?
            .set_default("application.allowed_origins", Vec::<String>::new())?
            .set_default("database.max_connections", i64::from(defaults::MAX_DB_CONNECTIONS))?
            .set_default("jwt.time_to_live", defaults::JWT_TIME_TO_LIVE_SECONDS)?
            .set_default("jwt.issuer", defaults::JWT_ISSUER)?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .separator(env::ENV_SEPARATOR)
                    .source(Some(vars.clone())),
            )
            .set_override_option("database.url", var(env::DATABASE_URL_ENV_VAR))?
            .set_override_option("jwt.secret", var(env::JWT_SECRET_ENV_VAR))?
            .set_override_option(
                "application.allowed_origins",
                var(env::ALLOWED_ORIGINS_ENV_VAR),
            )?
            .build()?
            .try_deserialize()
    }
}

/// Origins allowed to make cross-origin requests. Empty disables CORS handling.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for AllowedOrigins {
    type Error = String;

    fn try_from(origins: Vec<String>) -> Result<Self, Self::Error> {
        origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| format!("Invalid origin {origin}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for AllowedOrigins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts a list, or a comma separated string as found in env vars
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawOrigins {
            List(Vec<String>),
            Csv(String),
        }

        let origins = match RawOrigins::deserialize(deserializer)? {
            RawOrigins::List(origins) => origins,
            RawOrigins::Csv(origins) => origins.split(',').map(str::to_owned).collect(),
        };

        AllowedOrigins::try_from(origins).map_err(serde::de::Error::custom)
    }
}
