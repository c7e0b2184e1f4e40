// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: model identifiers against the known-model list, category
//! override keys against the category enumeration, and the log level.

use std::str::FromStr;

use rumo_core::Category;
use strum::IntoEnumIterator;

use crate::diagnostic::{ConfigError, suggest_key};
use crate::model::{KNOWN_MODELS, RumoConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RumoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "agent.log_level `{}` is not one of {}",
            config.agent.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    check_model(&mut errors, "routing.standard_model", &config.routing.standard_model);
    check_model(&mut errors, "routing.premium_model", &config.routing.premium_model);

    let category_names: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
    let category_refs: Vec<&str> = category_names.iter().map(String::as_str).collect();

    for (key, model) in &config.routing.category_models {
        if Category::from_str(key).is_err() {
            errors.push(ConfigError::Validation {
                message: format!("routing.category_models key `{key}` is not a known category"),
                help: suggest_key(key, &category_refs)
                    .map(|s| format!("did you mean `{s}`?"))
                    .or_else(|| Some(format!("valid categories: {}", category_refs.join(", ")))),
            });
        }
        // An empty override means "disabled"; the router ignores it.
        if !model.is_empty() {
            check_model(&mut errors, &format!("routing.category_models.{key}"), model);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_model(errors: &mut Vec<ConfigError>, field: &str, model: &str) {
    if model.trim().is_empty() {
        errors.push(ConfigError::validation(format!("{field} must not be empty")));
        return;
    }
    if !KNOWN_MODELS.contains(&model) {
        errors.push(ConfigError::Validation {
            message: format!("{field} `{model}` is not a known model"),
            help: suggest_key(model, KNOWN_MODELS)
                .map(|s| format!("did you mean `{s}`?")),
        });
    }
}
