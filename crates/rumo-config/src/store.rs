// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lock-free runtime configuration store.
//!
//! The routing configuration is mutable at runtime (an operator can swap
//! models or toggle the search backend while requests are in flight). The
//! store hands out immutable [`Arc`] snapshots: request handlers snapshot
//! once per routing call and never observe a half-updated configuration.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::info;

use crate::diagnostic::ConfigError;
use crate::model::RumoConfig;
use crate::validation::validate_config;

/// Shared, concurrently updatable configuration.
///
/// Readers call [`ConfigStore::snapshot`] and keep the returned `Arc` for
/// the duration of one request; writers call [`ConfigStore::replace`], which
/// validates before publishing. Readers never block writers and vice versa.
pub struct ConfigStore {
    inner: ArcSwap<RumoConfig>,
}

impl ConfigStore {
    /// Create a store seeded with an already-validated configuration.
    pub fn new(config: RumoConfig) -> Self {
        Self {
            inner: ArcSwap::from_pointee(config),
        }
    }

    /// Take an immutable snapshot of the current configuration.
    pub fn snapshot(&self) -> Arc<RumoConfig> {
        self.inner.load_full()
    }

    /// Validate and publish a new configuration.
    ///
    /// On validation failure the current configuration stays in place and
    /// the collected errors are returned.
    pub fn replace(&self, config: RumoConfig) -> Result<(), Vec<ConfigError>> {
        validate_config(&config)?;
        info!(
            standard_model = config.routing.standard_model.as_str(),
            premium_model = config.routing.premium_model.as_str(),
            perplexity_enabled = config.routing.perplexity_enabled,
            "runtime configuration replaced"
        );
        self.inner.store(Arc::new(config));
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(RumoConfig::default())
    }
}
