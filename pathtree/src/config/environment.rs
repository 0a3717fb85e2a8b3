//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHTREE_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;

/// Overrides the separator.
pub const SEPARATOR_ENV: &str = "PATHTREE_SEPARATOR";
/// Overrides the maximum listing depth.
pub const MAX_DEPTH_ENV: &str = "PATHTREE_MAX_DEPTH";
/// Overrides whether pathways include the node itself.
pub const INCLUDE_TERMINAL_ENV: &str = "PATHTREE_INCLUDE_TERMINAL";
/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "PATHTREE_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathtree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(separator) = env::var(SEPARATOR_ENV) {
            config.separator = Some(separator);
        }

        if let Ok(depth) = env::var(MAX_DEPTH_ENV) {
            config.max_depth = Some(depth.trim().parse().map_err(|_| Error::Validation {
                field: MAX_DEPTH_ENV.into(),
                message: "Must be a non-negative integer".into(),
            })?);
        }

        if let Ok(val) = env::var(INCLUDE_TERMINAL_ENV) {
            config.include_terminal = Some(Self::parse_bool(INCLUDE_TERMINAL_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{s}' (expected text/json/yaml)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        for (key, value) in vars {
            env::set_var(key, value);
        }
        f();
        for (key, _) in vars {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_bool_variants() {
        for input in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("test", input).unwrap());
        }
        for input in ["false", "FALSE", "0", "no", "Off"] {
            assert!(!EnvironmentConfig::parse_bool("test", input).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(
            EnvironmentConfig::parse_output_format("JSON").unwrap(),
            OutputFormat::Json
        );
        assert!(EnvironmentConfig::parse_output_format("xml").is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides() {
        with_env(
            &[
                (SEPARATOR_ENV, "::"),
                (MAX_DEPTH_ENV, "2"),
                (INCLUDE_TERMINAL_ENV, "yes"),
                (OUTPUT_FORMAT_ENV, "yaml"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.separator(), "::");
                assert_eq!(config.max_depth, Some(2));
                assert!(config.include_terminal());
                assert_eq!(config.output_format(), OutputFormat::Yaml);
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_depth_rejected() {
        with_env(&[(MAX_DEPTH_ENV, "deep")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == MAX_DEPTH_ENV));
        });
    }

    #[test]
    #[serial]
    fn test_no_env_vars_leaves_config() {
        let mut config = Config {
            max_depth: Some(7),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.max_depth, Some(7));
    }
}
