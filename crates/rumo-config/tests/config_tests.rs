// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Rumo configuration system.

use rumo_config::diagnostic::ConfigError;
use rumo_config::{ConfigStore, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_rumo_config() {
    let toml = r#"
[agent]
name = "carplay-assist"
log_level = "debug"

[routing]
standard_model = "gpt-4o-mini"
premium_model = "gpt-4.1"
perplexity_enabled = false

[routing.category_models]
web_search = "gpt-4o"
creative = "claude-sonnet-4-20250514"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "carplay-assist");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.routing.standard_model, "gpt-4o-mini");
    assert_eq!(config.routing.premium_model, "gpt-4.1");
    assert!(!config.routing.perplexity_enabled);
    assert_eq!(config.routing.category_models.len(), 2);
    assert_eq!(
        config.routing.category_models.get("web_search").unwrap(),
        "gpt-4o"
    );
}

/// Unknown field in [routing] section produces an UnknownField error.
#[test]
fn unknown_field_in_routing_produces_error() {
    let toml = r#"
[routing]
standart_model = "gpt-4o"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("standart_model"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "rumo");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.routing.standard_model, "claude-haiku-4-5-20251001");
    assert_eq!(config.routing.premium_model, "claude-haiku-4-5-20251001");
    assert!(config.routing.category_models.is_empty());
    assert!(config.routing.perplexity_enabled);
}

/// An unknown key surfaces as a diagnostic with a typo suggestion.
#[test]
fn unknown_key_diagnostic_carries_suggestion() {
    let toml = r#"
[routing]
standart_model = "gpt-4o"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce diagnostics");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, .. }
            if key == "standart_model"
                && suggestion.as_deref() == Some("standard_model"))
    });
    assert!(found, "expected UnknownKey with suggestion, got {errors:?}");
}

/// A syntactically valid config with an unknown model fails validation.
#[test]
fn unknown_model_fails_validation() {
    let toml = r#"
[routing]
standard_model = "gpt-9000"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message, .. } if message.contains("gpt-9000"))
    }));
}

/// A misspelled category key in the overrides map fails validation.
#[test]
fn misspelled_category_override_key_fails_validation() {
    let toml = r#"
[routing.category_models]
matematical = "gpt-4o"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { help, .. }
            if help.as_deref() == Some("did you mean `mathematical`?"))
    }));
}

/// The store round-trips a loaded config and validates on replace.
#[test]
fn store_round_trips_loaded_config() {
    let config = load_and_validate_str(
        r#"
[routing]
premium_model = "gpt-4.1"
"#,
    )
    .expect("config should validate");

    let store = ConfigStore::new(config);
    assert_eq!(store.snapshot().routing.premium_model, "gpt-4.1");

    let mut bad = rumo_config::RumoConfig::default();
    bad.routing.premium_model = "gpt-9000".to_string();
    assert!(store.replace(bad).is_err());
    // Failed replace leaves the published config untouched.
    assert_eq!(store.snapshot().routing.premium_model, "gpt-4.1");
}
