//! Tests for the hull configuration wrapper.

use super::*;

#[test]
fn default_uses_global_tolerance() {
    let cfg = HullConfig::default();
    assert_eq!(cfg.tolerance, GlobalConfig::default().tolerance);
    assert_eq!(cfg.seed_search, SeedSearch::LastAdded);
}

#[test]
fn new_rejects_non_positive_tolerance() {
    let err = HullConfig::new(0.0, SeedSearch::LastAdded).unwrap_err();
    assert_eq!(err, HullConfigError(ConfigError::InvalidTolerance(0.0)));
}

#[test]
fn with_seed_search_keeps_tolerance() {
    let cfg = HullConfig::new(1.0e-6, SeedSearch::LastAdded)
        .unwrap()
        .with_seed_search(SeedSearch::Exhaustive);
    assert_eq!(cfg.tolerance, 1.0e-6);
    assert_eq!(cfg.seed_search, SeedSearch::Exhaustive);
}

#[test]
fn loads_from_json_with_defaults() {
    let cfg: HullConfig = serde_json::from_str(r#"{ "seed_search": "exhaustive" }"#).unwrap();
    assert_eq!(cfg.seed_search, SeedSearch::Exhaustive);
    assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
    assert!(cfg.validate().is_ok());
}

#[test]
fn validate_catches_deserialized_bad_tolerance() {
    let cfg: HullConfig = serde_json::from_str(r#"{ "tolerance": -1.0 }"#).unwrap();
    assert!(cfg.validate().is_err());
}
