// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Rumo router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level Rumo configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RumoConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Model routing settings.
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "rumo".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Model routing configuration.
///
/// This is the snapshot the route resolver reads on every call. It is
/// runtime-mutable through [`ConfigStore`](crate::ConfigStore); the engine
/// never caches it across calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Fast/cheap model used for web_search, factual, mathematical, and
    /// simple categories.
    #[serde(default = "default_standard_model")]
    pub standard_model: String,

    /// Powerful model used for complex and creative categories.
    #[serde(default = "default_premium_model")]
    pub premium_model: String,

    /// Per-category model overrides, keyed by category name
    /// (`web_search`, `complex`, `factual`, `mathematical`, `creative`,
    /// `simple`). An override beats the standard/premium tier mapping.
    #[serde(default)]
    pub category_models: HashMap<String, String>,

    /// Enable the Perplexity Search API for web search. When enabled,
    /// `claude-` models keep web-search requests instead of falling back to
    /// an OpenAI model with managed search.
    #[serde(default = "default_perplexity_enabled")]
    pub perplexity_enabled: bool,
}

impl RoutingConfig {
    /// The model override for a category, if one is set and non-empty.
    ///
    /// An empty string in `category_models` means "no override"; it falls
    /// through to the standard/premium tier.
    pub fn category_override(&self, category: rumo_core::Category) -> Option<&str> {
        self.category_models
            .get(&category.to_string())
            .map(String::as_str)
            .filter(|model| !model.is_empty())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            standard_model: default_standard_model(),
            premium_model: default_premium_model(),
            category_models: HashMap::new(),
            perplexity_enabled: default_perplexity_enabled(),
        }
    }
}

fn default_standard_model() -> String {
    // Haiku 4.5 is fast enough for in-car latency budgets.
    "claude-haiku-4-5-20251001".to_string()
}

fn default_premium_model() -> String {
    "claude-haiku-4-5-20251001".to_string()
}

fn default_perplexity_enabled() -> bool {
    true
}

/// Models accepted for `standard_model`, `premium_model`, and
/// `category_models` values. OpenAI and Claude (Anthropic) families.
pub const KNOWN_MODELS: &[&str] = &[
    // GPT-4o series
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4o-2024-08-06",
    "chatgpt-4o-latest",
    // GPT-4 series
    "gpt-4-turbo",
    "gpt-3.5-turbo",
    // GPT-4.1 series
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-4.1-nano",
    // GPT-5 series
    "gpt-5",
    "gpt-5.1",
    "gpt-5-mini",
    "gpt-5-nano",
    "gpt-5-pro",
    // O-series reasoning models
    "o1",
    "o1-mini",
    "o1-pro",
    "o3",
    "o3-mini",
    "o4-mini",
    // Claude models
    "claude-haiku-4-5-20251001",
    "claude-3-5-haiku-20241022",
    "claude-3-5-haiku-latest",
    "claude-3-5-sonnet-20241022",
    "claude-3-5-sonnet-latest",
    "claude-sonnet-4-20250514",
    "claude-3-opus-20240229",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routing_models_are_known() {
        let routing = RoutingConfig::default();
        assert!(KNOWN_MODELS.contains(&routing.standard_model.as_str()));
        assert!(KNOWN_MODELS.contains(&routing.premium_model.as_str()));
    }

    #[test]
    fn default_perplexity_is_enabled() {
        assert!(RoutingConfig::default().perplexity_enabled);
    }

    #[test]
    fn routing_section_deserializes() {
        let toml_str = r#"
[routing]
standard_model = "gpt-4o-mini"
premium_model = "gpt-4.1"
perplexity_enabled = false

[routing.category_models]
web_search = "gpt-4o"
"#;
        let config: RumoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.routing.standard_model, "gpt-4o-mini");
        assert_eq!(config.routing.premium_model, "gpt-4.1");
        assert!(!config.routing.perplexity_enabled);
        assert_eq!(
            config.routing.category_models.get("web_search").unwrap(),
            "gpt-4o"
        );
    }

    #[test]
    fn empty_override_counts_as_absent() {
        let mut routing = RoutingConfig::default();
        routing
            .category_models
            .insert("factual".to_string(), String::new());
        assert_eq!(routing.category_override(rumo_core::Category::Factual), None);
        routing
            .category_models
            .insert("factual".to_string(), "gpt-4o".to_string());
        assert_eq!(
            routing.category_override(rumo_core::Category::Factual),
            Some("gpt-4o")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml_str = r#"
[routing]
standard_modell = "gpt-4o-mini"
"#;
        assert!(toml::from_str::<RumoConfig>(toml_str).is_err());
    }
}
