// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weighted category scoring over a normalized utterance.
//!
//! A category's score is its keyword hit count times its weight, unless a
//! negative keyword fires, in which case the score is zero regardless of
//! how many positives matched.

use rumo_core::Category;

use crate::matcher::MatcherRegistry;

/// Factual interrogatives are so common that the category would dominate
/// without dampening.
const FACTUAL_WEIGHT: f64 = 0.8;

/// Per-hit weight for a category.
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::Factual => FACTUAL_WEIGHT,
        _ => 1.0,
    }
}

/// Scores for every matchable category, in [`Category::MATCHABLE`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    entries: [(Category, f64); 5],
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, score)| *score)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Score one category against an already-normalized utterance.
pub fn score_category(
    registry: &MatcherRegistry,
    category: Category,
    normalized: &str,
) -> f64 {
    let Some(matcher) = registry.matcher(category) else {
        return 0.0;
    };
    if matcher.has_negative(normalized) {
        return 0.0;
    }
    f64::from(matcher.count_hits(normalized)) * category_weight(category)
}

/// Score all matchable categories against an already-normalized utterance.
pub fn score_all(registry: &MatcherRegistry, normalized: &str) -> CategoryScores {
    let entries = Category::MATCHABLE
        .map(|category| (category, score_category(registry, category, normalized)));
    CategoryScores { entries }
}
