//! Property tests for configuration parsing.

use std::path::Path;

use proptest::prelude::*;

use smartpark::config::{parse_with_warnings, CarparkConfig};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics and always yields a usable config.
    #[test]
    fn property_parse_never_panics(content in "\\PC{0,200}") {
        let (config, _warnings) = parse_with_warnings(&content, Path::new("fuzz.toml"));
        prop_assert!(config.capacity.get() >= 1);
        prop_assert!(config.temperature_interval_secs.get() >= 1);
    }

    /// PROPERTY: Any positive capacity is accepted in either file format.
    #[test]
    fn property_positive_capacity_is_honoured(
        capacity in 1usize..1_000_000,
        toml in any::<bool>()
    ) {
        let content = if toml {
            format!("capacity = {capacity}\n")
        } else {
            format!("capacity: {capacity}\n")
        };
        let (config, warnings) = parse_with_warnings(&content, Path::new("carpark_config.toml"));
        prop_assert!(warnings.is_empty(), "{warnings:?}");
        prop_assert_eq!(config.capacity.get(), capacity);
    }

    /// PROPERTY: Non-positive capacities fall back to the default with one warning.
    #[test]
    fn property_non_positive_capacity_falls_back(capacity in -10_000i64..=0) {
        let content = format!("capacity = {capacity}\n");
        let (config, warnings) = parse_with_warnings(&content, Path::new("carpark_config.toml"));
        prop_assert_eq!(config.capacity, CarparkConfig::default().capacity);
        prop_assert_eq!(warnings.len(), 1);
    }
}
