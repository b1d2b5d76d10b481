use std::time::Duration as StdDuration;

use axum::http::HeaderValue;
use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use warden_core::SessionPolicy;

use crate::{
    config::constants::{env, files, prod},
    hashing::Argon2PasswordHasher,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WardenSettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub hashing: HashingSettings,
    pub allowed_origins: Vec<String>,
    pub seed_demo_accounts: bool,
}

impl WardenSettings {
    /// Loads `.env`, then `config/warden.{json,...}` if present, then
    /// `WARDEN__*` environment variables, each overriding the last.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(files::SETTINGS_FILE)
    }

    pub fn load_from(settings_file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(settings_file).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()
            .and_then(Self::validated)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.session.validate()?;
        Ok(self)
    }

    pub fn allowed_origins(&self) -> Result<AllowedOrigins, ConfigError> {
        AllowedOrigins::try_from(self.allowed_origins.as_slice())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: prod::HOST.to_string(),
            port: prod::PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub idle_timeout_minutes: i64,
    pub persistent_lifetime_days: i64,
    pub sweep_interval_secs: u64,
}

impl SessionSettings {
    pub const MAX_IDLE_TIMEOUT_MINUTES: i64 = 7 * 24 * 60;
    pub const MAX_PERSISTENT_LIFETIME_DAYS: i64 = 365;

    /// Rejects lifetimes that are not positive or exceed the upper bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "session.idle_timeout_minutes",
            self.idle_timeout_minutes,
            Self::MAX_IDLE_TIMEOUT_MINUTES,
        )?;
        check_range(
            "session.persistent_lifetime_days",
            self.persistent_lifetime_days,
            Self::MAX_PERSISTENT_LIFETIME_DAYS,
        )
    }

    pub fn policy(&self) -> SessionPolicy {
        SessionPolicy::new(
            Duration::try_minutes(self.idle_timeout_minutes).unwrap_or(Duration::MAX),
            Duration::try_days(self.persistent_lifetime_days).unwrap_or(Duration::MAX),
        )
    }

    pub fn sweep_interval(&self) -> StdDuration {
        StdDuration::from_secs(self.sweep_interval_secs.max(1))
    }
}

fn check_range(key: &str, value: i64, max: i64) -> Result<(), ConfigError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Message(format!(
            "{key} must be between 1 and {max}, got {value}"
        )))
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: SessionPolicy::DEFAULT_IDLE_TIMEOUT_MINUTES,
            persistent_lifetime_days: SessionPolicy::DEFAULT_PERSISTENT_LIFETIME_DAYS,
            sweep_interval_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashingAlgorithm {
    #[default]
    Argon2,
    Sha256,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HashingSettings {
    pub algorithm: HashingAlgorithm,
    pub argon2: Argon2Settings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Settings {
    fn default() -> Self {
        Self {
            memory_kib: Argon2PasswordHasher::DEFAULT_MEMORY_KIB,
            iterations: Argon2PasswordHasher::DEFAULT_ITERATIONS,
            parallelism: Argon2PasswordHasher::DEFAULT_PARALLELISM,
        }
    }
}

/// Origins allowed to make credentialed cross-origin requests.
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

impl TryFrom<&[String]> for AllowedOrigins {
    type Error = ConfigError;

    fn try_from(origins: &[String]) -> Result<Self, Self::Error> {
        origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|e| ConfigError::Message(format!("invalid origin {origin:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
