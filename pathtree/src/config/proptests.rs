//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{BreadcrumbConfig, Config, WalkConfig};
use super::validator::ConfigValidator;
use crate::output::OutputFormat;
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Text),
        Just(OutputFormat::Json),
        Just(OutputFormat::Yaml),
    ]
}

fn walk_strategy() -> impl Strategy<Value = WalkConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(0usize..10),
    )
        .prop_map(|(hidden, follow_links, max_depth)| WalkConfig {
            hidden,
            follow_links,
            max_depth,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[/:|]{1,3}"),
        prop::option::of(0usize..10),
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
        prop::option::of(walk_strategy()),
        prop::option::of("[A-Za-z]{1,12}"),
    )
        .prop_map(
            |(separator, max_depth, include_terminal, output_format, walk, prefix)| Config {
                separator,
                max_depth,
                include_terminal,
                output_format,
                walk,
                breadcrumbs: prefix.map(|prefix| BreadcrumbConfig {
                    prefix: Some(prefix),
                    suffix: None,
                }),
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields in the higher layer always win; unset ones fall through
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.separator, high.separator.clone().or(low.separator.clone()));
        prop_assert_eq!(merged.max_depth, high.max_depth.or(low.max_depth));
        prop_assert_eq!(merged.include_terminal, high.include_terminal.or(low.include_terminal));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging an empty config is the identity
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Generated configs only use legal values and always validate
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Configs survive a YAML round trip
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
