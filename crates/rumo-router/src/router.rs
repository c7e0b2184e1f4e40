// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category selection and model resolution.
//!
//! Selection walks a fixed priority order and keeps the first strictly
//! highest score at or above the threshold; anything below the threshold
//! falls through to `Simple`. Resolution maps the selected category to a
//! model from the routing configuration, then reconciles web-search
//! capability with what the chosen model can actually do.

use rumo_config::RoutingConfig;
use rumo_core::{Category, ReasoningEffort, RouteDecision};

use crate::matcher::MatcherRegistry;
use crate::normalizer::normalize;
use crate::scorer::{score_all, CategoryScores};

/// Minimum score a category must reach to beat the `Simple` fallback.
const MIN_CATEGORY_SCORE: f64 = 1.0;

/// Ties resolve to the earliest entry here. Specific intents come before
/// broad ones so that "calcule e explique" routes to math, not complex.
const PRIORITY_ORDER: [Category; 5] = [
    Category::Mathematical,
    Category::WebSearch,
    Category::Creative,
    Category::Complex,
    Category::Factual,
];

/// Models that support the managed web-search tool. Anything else asked
/// to search falls back to [`WEB_SEARCH_FALLBACK_MODEL`].
const WEB_SEARCH_CAPABLE: &[&str] = &[
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4o-2024-08-06",
    "chatgpt-4o-latest",
    "gpt-4-turbo",
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-5",
    "gpt-5.1",
    "gpt-5-pro",
    "gpt-5-mini",
    "o3",
    "o3-mini",
    "o4-mini",
];

const WEB_SEARCH_FALLBACK_MODEL: &str = "gpt-4o-mini";

/// Stateless intent router over a compiled keyword registry.
#[derive(Debug, Default)]
pub struct IntentRouter {
    registry: MatcherRegistry,
}

impl IntentRouter {
    pub fn new() -> Self {
        IntentRouter {
            registry: MatcherRegistry::build(),
        }
    }

    /// Classify an utterance into a category.
    pub fn classify(&self, text: &str) -> Category {
        let normalized = normalize(text);
        let scores = score_all(&self.registry, &normalized);
        let category = select(&scores);
        tracing::info!(%category, "classified utterance");
        category
    }

    /// Classify an utterance and resolve it to a full routing decision
    /// against the given configuration snapshot.
    pub fn route(&self, text: &str, routing: &RoutingConfig) -> RouteDecision {
        let category = self.classify(text);
        resolve(category, routing)
    }

    /// Raw per-category scores, exposed for inspection tooling.
    pub fn scores(&self, text: &str) -> CategoryScores {
        score_all(&self.registry, &normalize(text))
    }
}

/// Pick the winning category from a score table.
///
/// The maximum starts at zero with `Simple` as the holder, and only a
/// strictly greater score that also clears the threshold can take over.
/// Walking [`PRIORITY_ORDER`] makes ties deterministic.
pub fn select(scores: &CategoryScores) -> Category {
    let mut best = Category::Simple;
    let mut max = 0.0f64;
    for category in PRIORITY_ORDER {
        let score = scores.get(category);
        if score > max && score >= MIN_CATEGORY_SCORE {
            best = category;
            max = score;
        }
    }
    best
}

/// Resolve a category to a model decision under the given configuration.
pub fn resolve(category: Category, routing: &RoutingConfig) -> RouteDecision {
    let model = match routing.category_override(category) {
        Some(model) => {
            tracing::info!(%category, model, "category override in effect");
            model.to_string()
        }
        None => match category {
            Category::Complex | Category::Creative => routing.premium_model.clone(),
            _ => routing.standard_model.clone(),
        },
    };

    let mut decision = RouteDecision {
        category,
        web_search: category == Category::WebSearch,
        reasoning_effort: None,
        model,
    };

    if decision.web_search {
        reconcile_web_search(&mut decision, routing);
    }
    decision
}

/// Make sure a web-search decision lands on a model that can search.
///
/// Claude models search natively when the Perplexity integration is on.
/// OpenAI models must be on the capability list; anything else is swapped
/// for the fallback model, which needs no reasoning configuration. The
/// gpt-5 family refuses managed search without an explicit reasoning
/// effort, so capable gpt-5 models get the minimum accepted level.
fn reconcile_web_search(decision: &mut RouteDecision, routing: &RoutingConfig) {
    if decision.model.starts_with("claude-") && routing.perplexity_enabled {
        return;
    }
    if !WEB_SEARCH_CAPABLE.contains(&decision.model.as_str()) {
        tracing::warn!(
            from = %decision.model,
            to = WEB_SEARCH_FALLBACK_MODEL,
            "model cannot web-search, falling back"
        );
        decision.model = WEB_SEARCH_FALLBACK_MODEL.to_string();
        return;
    }
    if decision.model.starts_with("gpt-5") {
        decision.reasoning_effort = Some(ReasoningEffort::Medium);
    }
}
