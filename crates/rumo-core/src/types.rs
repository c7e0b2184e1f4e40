// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the router engine, configuration, and CLI.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Intent category an utterance is classified into.
///
/// The string forms (`web_search`, `complex`, ...) are what appear in the
/// `category_models` configuration map and in CLI/JSON output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Needs fresh information from the web (news, weather, quotes, scores).
    WebSearch,
    /// Deep explanation, analysis, or comparison.
    Complex,
    /// Single-fact lookup answerable from model knowledge.
    Factual,
    /// Calculation, conversion, or other math work.
    Mathematical,
    /// Open-ended generation, suggestions, opinions.
    Creative,
    /// Default fallback when no category clears the score threshold.
    /// Never matched by keywords.
    Simple,
}

impl Category {
    /// The five categories that carry keyword lists, in no particular order.
    /// `Simple` is excluded: it is the residual outcome, not a matchable one.
    pub const MATCHABLE: [Category; 5] = [
        Category::WebSearch,
        Category::Complex,
        Category::Factual,
        Category::Mathematical,
        Category::Creative,
    ];
}

/// Reasoning-effort level requested from the model.
///
/// Absence of a reasoning configuration is expressed as
/// `Option<ReasoningEffort>::None` rather than a dedicated variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

/// The routing outcome for a single utterance.
///
/// Produced once per request; the engine retains nothing across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// Selected intent category.
    pub category: Category,
    /// Model identifier the caller should invoke.
    pub model: String,
    /// Whether managed web search must be enabled for the call.
    pub web_search: bool,
    /// Reasoning-effort level, when the model family requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn category_display_round_trips() {
        for category in Category::iter() {
            let s = category.to_string();
            let parsed = Category::from_str(&s).expect("should parse back");
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn category_snake_case_strings() {
        assert_eq!(Category::WebSearch.to_string(), "web_search");
        assert_eq!(Category::Mathematical.to_string(), "mathematical");
        assert_eq!(Category::Simple.to_string(), "simple");
    }

    #[test]
    fn matchable_excludes_simple() {
        assert_eq!(Category::MATCHABLE.len(), 5);
        assert!(!Category::MATCHABLE.contains(&Category::Simple));
    }

    #[test]
    fn reasoning_effort_serializes_lowercase() {
        let json = serde_json::to_string(&ReasoningEffort::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn decision_omits_absent_effort_in_json() {
        let decision = RouteDecision {
            category: Category::Simple,
            model: "claude-haiku-4-5-20251001".to_string(),
            web_search: false,
            reasoning_effort: None,
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert!(!json.contains("reasoning_effort"));
        assert!(json.contains("\"category\":\"simple\""));
    }

    #[test]
    fn decision_includes_effort_when_set() {
        let decision = RouteDecision {
            category: Category::WebSearch,
            model: "gpt-5".to_string(),
            web_search: true,
            reasoning_effort: Some(ReasoningEffort::Medium),
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert!(json.contains("\"reasoning_effort\":\"medium\""));
    }
}
