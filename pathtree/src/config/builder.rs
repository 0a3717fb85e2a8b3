//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from files, environment and overrides.
///
/// # Examples
///
/// ```
/// use pathtree::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_depth: Some(2), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.max_depth, Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory where project configuration discovery starts.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`, instead of `~/.pathtree`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignore user and project configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHTREE_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layers `config` above every other source. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merges all sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the merged configuration fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                debug!(
                    "Using configuration {} (precedence {})",
                    source.path.display(),
                    source.precedence
                );
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::SEPARATOR_ENV;
    use crate::error::Error;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_layer_in_order() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                separator: Some("::".into()),
                max_depth: Some(1),
                ..Default::default()
            })
            .with_config(Config {
                max_depth: Some(2),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.separator(), "::");
        assert_eq!(config.max_depth, Some(2));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                separator: Some("..".into()),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    #[serial]
    fn test_files_then_env() {
        let config_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(config_dir.path().join("config.yaml"), "max_depth: 9\nseparator: '|'\n").unwrap();
        fs::write(project.path().join("pathtree.yaml"), "max_depth: 3\n").unwrap();

        env::set_var(SEPARATOR_ENV, "::");
        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_config_dir(config_dir.path())
            .build();
        env::remove_var(SEPARATOR_ENV);

        let config = config.unwrap();
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.separator(), "::");
    }
}
