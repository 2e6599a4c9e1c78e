//! Configuration management for the circulation desk

use argon2::password_hash::PasswordHash;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoansConfig {
    /// Maximum number of concurrent loans per reader
    pub max_loans: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub login: String,
    pub name: String,
    pub id: i32,
    /// Argon2 PHC string. The admin gate stays closed while unset.
    pub password_hash: Option<String>,
    pub max_attempts: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub loans: LoansConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = AppConfig::default();

        let config = Config::builder()
            .set_default("loans.max_loans", defaults.loans.max_loans as u64)?
            .set_default("admin.login", defaults.admin.login)?
            .set_default("admin.name", defaults.admin.name)?
            .set_default("admin.id", defaults.admin.id as i64)?
            .set_default("admin.max_attempts", defaults.admin.max_attempts as u64)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // ELIDUNE_ADMIN__PASSWORD_HASH, ELIDUNE_LOANS__MAX_LOANS, ...
            .add_source(
                Environment::with_prefix("ELIDUNE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.admin.check_password_hash()?;
        Ok(app_config)
    }
}

impl AdminConfig {
    /// Reject a password hash that is not a PHC string before the desk opens
    fn check_password_hash(&self) -> Result<(), ConfigError> {
        if let Some(ref hash) = self.password_hash {
            PasswordHash::new(hash).map_err(|e| {
                ConfigError::Message(format!(
                    "admin.password_hash is not a valid PHC string: {}",
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self { max_loans: 3 }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            login: "admin".to_string(),
            name: "Mme Majdouline".to_string(),
            id: 101,
            password_hash: None,
            max_attempts: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
