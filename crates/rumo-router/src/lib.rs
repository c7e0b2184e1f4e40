// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic intent routing for Portuguese utterances.
//!
//! The pipeline is pure and synchronous: normalize the utterance
//! (lowercase, de-accent, strip punctuation, stem), count keyword hits per
//! category, apply weights and negative-keyword suppression, then pick the
//! winner along a fixed priority order. The winning category is resolved
//! to a model decision against the active [`rumo_config::RoutingConfig`]
//! snapshot.
//!
//! ```
//! use rumo_config::RoutingConfig;
//! use rumo_router::IntentRouter;
//!
//! let router = IntentRouter::new();
//! let decision = router.route("Quais as notícias de hoje?", &RoutingConfig::default());
//! assert!(decision.web_search);
//! ```

mod keywords;
mod matcher;
mod normalizer;
mod router;
mod scorer;

pub use matcher::MatcherRegistry;
pub use normalizer::normalize;
pub use router::{resolve, select, IntentRouter};
pub use scorer::{score_all, CategoryScores};
