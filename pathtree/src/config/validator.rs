//! Configuration validation.

use crate::config::schema::{BreadcrumbConfig, Config};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathtree::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { separator: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref separator) = config.separator {
            Self::validate_separator(separator)?;
        }

        if let Some(ref crumbs) = config.breadcrumbs {
            Self::validate_breadcrumbs(crumbs)?;
        }

        Ok(())
    }

    /// A separator must be non-empty and must not collide with the `.` and
    /// `..` navigation segments.
    fn validate_separator(separator: &str) -> Result<()> {
        if separator.is_empty() {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "Cannot be empty".into(),
            });
        }

        if separator == "." || separator == ".." {
            return Err(Error::Validation {
                field: "separator".into(),
                message: format!("'{separator}' is reserved for relative navigation"),
            });
        }

        if separator.contains('\0') {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_breadcrumbs(crumbs: &BreadcrumbConfig) -> Result<()> {
        for (field, label) in [
            ("breadcrumbs.prefix", &crumbs.prefix),
            ("breadcrumbs.suffix", &crumbs.suffix),
        ] {
            if let Some(label) = label {
                Self::validate_label(field, label)?;
            }
        }
        Ok(())
    }

    fn validate_label(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if value.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }
        Ok(())
    }
}
