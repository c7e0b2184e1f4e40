// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rumo config` command implementation.

use rumo_config::RumoConfig;

/// Runs `rumo config`: print the effective configuration as TOML, after
/// defaults, files, and environment overrides have been merged.
pub fn run(config: &RumoConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
