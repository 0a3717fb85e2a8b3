//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{BreadcrumbConfig, Config, WalkConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathtree::config::{Config, ConfigMerger};
///
/// let low = Config { separator: Some("/".to_string()), ..Default::default() };
/// let high = Config { separator: Some("::".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.separator(), "::");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Simple fields are overwritten when set in `source`; nested sections
    /// are merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.separator.is_some() {
            target.separator.clone_from(&source.separator);
        }

        if source.max_depth.is_some() {
            target.max_depth = source.max_depth;
        }

        if source.include_terminal.is_some() {
            target.include_terminal = source.include_terminal;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_walk) = source.walk {
            target.walk = Some(match &target.walk {
                Some(target_walk) => Self::merge_walk(target_walk, source_walk),
                None => source_walk.clone(),
            });
        }

        if let Some(ref source_crumbs) = source.breadcrumbs {
            target.breadcrumbs = Some(match &target.breadcrumbs {
                Some(target_crumbs) => Self::merge_breadcrumbs(target_crumbs, source_crumbs),
                None => source_crumbs.clone(),
            });
        }
    }

    fn merge_walk(target: &WalkConfig, source: &WalkConfig) -> WalkConfig {
        WalkConfig {
            hidden: source.hidden.or(target.hidden),
            follow_links: source.follow_links.or(target.follow_links),
            max_depth: source.max_depth.or(target.max_depth),
        }
    }

    fn merge_breadcrumbs(target: &BreadcrumbConfig, source: &BreadcrumbConfig) -> BreadcrumbConfig {
        BreadcrumbConfig {
            prefix: source.prefix.clone().or_else(|| target.prefix.clone()),
            suffix: source.suffix.clone().or_else(|| target.suffix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("source-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_simple_fields_overwritten() {
        let mut target = Config {
            separator: Some("/".into()),
            max_depth: Some(1),
            include_terminal: Some(false),
            ..Default::default()
        };
        let source = Config {
            max_depth: Some(4),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);

        assert_eq!(target.separator.as_deref(), Some("/"));
        assert_eq!(target.max_depth, Some(4));
        assert_eq!(target.include_terminal, Some(false));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_nested_sections_merge_field_by_field() {
        let mut target = Config {
            walk: Some(WalkConfig {
                hidden: Some(true),
                follow_links: None,
                max_depth: Some(2),
            }),
            breadcrumbs: Some(BreadcrumbConfig {
                prefix: Some("Home".into()),
                suffix: None,
            }),
            ..Default::default()
        };
        let source = Config {
            walk: Some(WalkConfig {
                hidden: None,
                follow_links: Some(true),
                max_depth: Some(5),
            }),
            breadcrumbs: Some(BreadcrumbConfig {
                prefix: None,
                suffix: Some("End".into()),
            }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);

        let walk = target.walk.unwrap();
        assert_eq!(walk.hidden, Some(true));
        assert_eq!(walk.follow_links, Some(true));
        assert_eq!(walk.max_depth, Some(5));

        let crumbs = target.breadcrumbs.unwrap();
        assert_eq!(crumbs.prefix.as_deref(), Some("Home"));
        assert_eq!(crumbs.suffix.as_deref(), Some("End"));
    }

    #[test]
    fn test_merge_in_precedence_order() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    separator: Some(".".into()),
                    max_depth: Some(1),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    max_depth: Some(3),
                    ..Default::default()
                },
            ),
        ]);
        assert_eq!(merged.separator(), ".");
        assert_eq!(merged.max_depth, Some(3));
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
