//! Command to check a configuration file without running anything.
//!
//! Both `config.yaml` and `pathtree.yaml` share one schema, so any layer can
//! be validated the same way.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathtree::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a pathtree configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::SemanticFailure("Configuration file is invalid".to_string())
        })?;

        ConfigValidator::validate(&config).map_err(|e| {
            eprintln!("Validation error: {e}");
            CliError::SemanticFailure("Configuration validation failed".to_string())
        })?;

        println!("Configuration is valid");
        Ok(())
    }
}
