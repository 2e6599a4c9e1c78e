//! Authentication for the administrator and reader gates

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use validator::Validate;

use crate::{
    config::AdminConfig,
    error::{AppError, AppResult},
    models::user::{AdminLogin, ReaderLogin},
};

#[derive(Debug, Clone)]
pub struct AuthService {
    config: AdminConfig,
}

impl AuthService {
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }

    pub fn max_admin_attempts(&self) -> u32 {
        self.config.max_attempts.max(1)
    }

    /// Check administrator credentials against the configured argon2 hash
    pub fn authenticate_admin(&self, credentials: &AdminLogin) -> AppResult<()> {
        let Some(ref hash) = self.config.password_hash else {
            tracing::warn!("Admin login attempted but no password hash is configured");
            return Err(AppError::Authentication(
                "Administrator access is not configured (set ELIDUNE_ADMIN__PASSWORD_HASH)"
                    .to_string(),
            ));
        };

        if credentials.login != self.config.login || !verify_password(hash, &credentials.password)? {
            tracing::warn!(login = %credentials.login, "Admin login failed");
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        tracing::info!(login = %credentials.login, "Admin logged in");
        Ok(())
    }

    /// Reader passwords are only checked for length
    pub fn authenticate_reader(&self, credentials: &ReaderLogin) -> AppResult<()> {
        credentials.validate()?;
        tracing::info!(reader = %credentials.username, "Reader logged in");
        Ok(())
    }
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        tracing::error!("Configured admin password hash is invalid: {}", e);
        AppError::Authentication("Administrator password hash is invalid".to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
