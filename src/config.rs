//! Configuration management for account-forms
//!
//! Loaded once at startup from an optional `config.toml` with environment
//! overrides (`ACCOUNT_FORMS_*`). Every key has a default, so running without
//! a file is fine.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::auth::ValidationRules;
use crate::controller::ErrorPolicy;

/// Locations searched for the config file, in order; later files override earlier ones.
pub const CONFIG_PATHS: &[&str] = &[
    "account-forms/config", // Packaged layout: ./account-forms/config.toml
    "config",               // Local development: ./config.toml
];

const ENV_PREFIX: &str = "ACCOUNT_FORMS";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// JSON file backing the user store; empty selects the in-memory store
    pub store_path: String,

    #[serde(flatten)]
    pub rules: ValidationRules,

    /// Which validator message stays on display when several fail
    pub error_policy: ErrorPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: String::new(),
            rules: ValidationRules::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default locations with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_PATHS)
    }

    /// Load configuration from the given file names (extension optional)
    pub fn load_from(paths: &[&str]) -> Result<Self, config::ConfigError> {
        let defaults = ValidationRules::default();

        let mut builder = Config::builder()
            .set_default("store_path", "")?
            .set_default("min_username_length", defaults.min_username_length as i64)?
            .set_default("min_password_length", defaults.min_password_length as i64)?
            .set_default("blocked_email_domain", defaults.blocked_email_domain)?
            .set_default("error_policy", "last_wins")?;

        for path in paths {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the store file, or `None` for the in-memory store
    pub fn store_path(&self) -> Option<PathBuf> {
        let trimmed = self.store_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.rules.min_username_length == 0 {
            return Err(config::ConfigError::Message(
                "min_username_length must be greater than 0".into(),
            ));
        }

        if self.rules.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        let domain = self.rules.blocked_email_domain.trim();
        if domain.is_empty() || domain.contains('@') {
            return Err(config::ConfigError::Message(
                "blocked_email_domain must be a bare domain like 'example.com'".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load_from(&["does-not-exist/config"]).unwrap();
        assert_eq!(config.rules, ValidationRules::default());
        assert_eq!(config.error_policy, ErrorPolicy::LastWins);
        assert_eq!(config.store_path(), None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
store_path = "users.json"
min_password_length = 16
blocked_email_domain = "mailinator.com"
error_policy = "first_wins"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&[path.to_str().unwrap()]).unwrap();
        assert_eq!(config.rules.min_password_length, 16);
        assert_eq!(config.rules.min_username_length, 4);
        assert_eq!(config.rules.blocked_email_domain, "mailinator.com");
        assert_eq!(config.error_policy, ErrorPolicy::FirstWins);
        assert_eq!(config.store_path(), Some(PathBuf::from("users.json")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "blocked_email_domain = \"@example.com\"\n").unwrap();

        assert!(AppConfig::load_from(&[path.to_str().unwrap()]).is_err());
    }
}
