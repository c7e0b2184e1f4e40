// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./rumo.toml` > `~/.config/rumo/rumo.toml` >
//! `/etc/rumo/rumo.toml` with environment variable overrides via the
//! `RUMO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::RumoConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/rumo/rumo.toml` (system-wide)
/// 3. `~/.config/rumo/rumo.toml` (user XDG config)
/// 4. `./rumo.toml` (local directory)
/// 5. `RUMO_*` environment variables
pub fn load_config() -> Result<RumoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RumoConfig::default()))
        .merge(Toml::file("/etc/rumo/rumo.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("rumo/rumo.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("rumo.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RumoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RumoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RumoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RumoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `RUMO_ROUTING_STANDARD_MODEL` must map
/// to `routing.standard_model`, not `routing.standard.model`.
fn env_provider() -> Env {
    Env::prefixed("RUMO_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: RUMO_ROUTING_STANDARD_MODEL -> "routing_standard_model"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("routing_", "routing.", 1);
        mapped.into()
    })
}
