//! Provider Configuration
//!
//! Connection parameters for the hosted backend, read from the environment.
//! All six parameters are required. Missing ones are collected and reported
//! together, so a misconfigured deployment fails loudly at startup instead of
//! failing individual operations later.

use std::env;
use thiserror::Error;

/// Environment variable names for the provider connection parameters
pub const ENV_API_KEY: &str = "TALLY_API_KEY";
pub const ENV_AUTH_DOMAIN: &str = "TALLY_AUTH_DOMAIN";
pub const ENV_PROJECT_ID: &str = "TALLY_PROJECT_ID";
pub const ENV_STORAGE_BUCKET: &str = "TALLY_STORAGE_BUCKET";
pub const ENV_MESSAGING_SENDER_ID: &str = "TALLY_MESSAGING_SENDER_ID";
pub const ENV_APP_ID: &str = "TALLY_APP_ID";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required parameters are absent or empty
    #[error("missing required configuration: {}", missing.join(", "))]
    MissingParameters { missing: Vec<String> },

    /// A parameter is present but not valid unicode
    #[error("configuration parameter {name} is not valid unicode")]
    InvalidParameter { name: String },
}

/// Hosted-backend connection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl ProviderConfig {
    /// Read the configuration from the environment
    ///
    /// An empty value counts as missing. Every absent parameter is named in
    /// the returned error, not just the first one encountered.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let config = Self {
            api_key: read_required(ENV_API_KEY, &mut missing)?,
            auth_domain: read_required(ENV_AUTH_DOMAIN, &mut missing)?,
            project_id: read_required(ENV_PROJECT_ID, &mut missing)?,
            storage_bucket: read_required(ENV_STORAGE_BUCKET, &mut missing)?,
            messaging_sender_id: read_required(ENV_MESSAGING_SENDER_ID, &mut missing)?,
            app_id: read_required(ENV_APP_ID, &mut missing)?,
        };

        if missing.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::MissingParameters { missing })
        }
    }

    /// Create config for development against the in-memory backends
    pub fn development() -> Self {
        Self {
            api_key: "dev-api-key".to_string(),
            auth_domain: "localhost".to_string(),
            project_id: "demo-tally".to_string(),
            storage_bucket: "demo-tally.appspot.com".to_string(),
            messaging_sender_id: "000000000000".to_string(),
            app_id: "1:000000000000:web:dev".to_string(),
        }
    }
}

fn read_required(name: &'static str, missing: &mut Vec<String>) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => {
            missing.push(name.to_string());
            Ok(String::new())
        }
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidParameter {
            name: name.to_string(),
        }),
    }
}
