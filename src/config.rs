//! Configuration management for the contact phone resolver.
//!
//! This module loads the numbering plan and runtime settings from environment
//! variables, reading an optional `.env` file first.

use crate::error::{ConfigError, ConfigResult};
use crate::numbering::{NumberingPlan, PhoneNumberClassifier};
use std::env;
use std::path::PathBuf;

/// Resolver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Country numbering rules (prefix, trunk code, mobile pattern and type)
    pub plan: NumberingPlan,

    /// JSON contacts file for the in-memory directory (optional)
    pub contacts_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_INTERNATIONAL_PREFIX`: prefix rewritten to the trunk code (default: "+33")
    /// - `PHONE_TRUNK_CODE`: local trunk code (default: "0")
    /// - `PHONE_MOBILE_PATTERN`: regex for normalized mobile numbers (default: `0[67]\d{8}`)
    /// - `PHONE_MOBILE_TYPE`: directory category code for mobiles (default: 2)
    /// - `CONTACTS_FILE`: path to a JSON contacts file
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = NumberingPlan::default();

        let international_prefix =
            env::var("PHONE_INTERNATIONAL_PREFIX").unwrap_or(defaults.international_prefix);
        if international_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_INTERNATIONAL_PREFIX".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let plan = NumberingPlan {
            international_prefix,
            trunk_code: env::var("PHONE_TRUNK_CODE").unwrap_or(defaults.trunk_code),
            mobile_pattern: env::var("PHONE_MOBILE_PATTERN").unwrap_or(defaults.mobile_pattern),
            mobile_type: Self::parse_env_i32("PHONE_MOBILE_TYPE", defaults.mobile_type)?,
        };

        // Surface a bad pattern at startup rather than on first lookup
        PhoneNumberClassifier::new(&plan)?;

        let contacts_file = env::var("CONTACTS_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            plan,
            contacts_file,
            log_level,
        })
    }

    /// Parse an environment variable as i32 with a default value.
    fn parse_env_i32(var_name: &str, default: i32) -> ConfigResult<i32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be an integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            plan: NumberingPlan::default(),
            contacts_file: None,
            log_level: "error".to_string(),
        }
    }
}
