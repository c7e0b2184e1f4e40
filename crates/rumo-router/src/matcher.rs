// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword compilation.
//!
//! Raw keyword lists are normalized with the same pipeline applied to
//! utterances, then compiled once into per-category matchers. Single
//! tokens become one word-boundary alternation regex; phrases stay as
//! normalized strings and are matched by substring. The registry is
//! immutable after [`MatcherRegistry::build`], so it can be shared freely
//! across threads.

use std::collections::HashMap;

use regex::Regex;
use rumo_core::Category;

use crate::keywords::{self, KeywordSet};
use crate::normalizer::normalize;

/// Compiled match machinery for one category.
#[derive(Debug)]
pub struct CompiledMatcher {
    /// `\b(kw|kw|...)\b` over all normalized single-token keywords.
    singles: Option<Regex>,
    /// Normalized multi-word keywords, matched by substring.
    phrases: Vec<String>,
    /// `\b(neg|neg|...)\b` over all normalized negative keywords.
    negatives: Option<Regex>,
}

impl CompiledMatcher {
    fn compile(set: &KeywordSet) -> Self {
        let mut singles = Vec::new();
        let mut phrases = Vec::new();
        for raw in set.keywords {
            let normalized = normalize(raw);
            if normalized.is_empty() {
                continue;
            }
            if normalized.contains(' ') {
                phrases.push(normalized);
            } else {
                singles.push(normalized);
            }
        }
        let negatives: Vec<String> = set
            .negatives
            .iter()
            .map(|raw| normalize(raw))
            .filter(|n| !n.is_empty())
            .collect();

        CompiledMatcher {
            singles: alternation(&singles),
            phrases,
            negatives: alternation(&negatives),
        }
    }

    /// True if any negative keyword occurs in the normalized utterance.
    pub fn has_negative(&self, normalized: &str) -> bool {
        self.negatives
            .as_ref()
            .is_some_and(|re| re.is_match(normalized))
    }

    /// Count keyword hits in the normalized utterance.
    ///
    /// Each phrase occurrence counts once; single tokens count every
    /// non-overlapping word-boundary occurrence.
    pub fn count_hits(&self, normalized: &str) -> u32 {
        let mut hits = 0u32;
        for phrase in &self.phrases {
            if normalized.contains(phrase.as_str()) {
                hits += 1;
            }
        }
        if let Some(re) = &self.singles {
            hits += re.find_iter(normalized).count() as u32;
        }
        hits
    }
}

fn alternation(terms: &[String]) -> Option<Regex> {
    if terms.is_empty() {
        return None;
    }
    let escaped: Vec<String> = terms.iter().map(|t| regex::escape(t)).collect();
    let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
    // Patterns are built from escaped literals, so compilation cannot fail.
    Regex::new(&pattern).ok()
}

/// All per-category matchers, compiled once at startup.
#[derive(Debug)]
pub struct MatcherRegistry {
    matchers: HashMap<Category, CompiledMatcher>,
}

impl MatcherRegistry {
    /// Normalize and compile every category's keyword lists.
    pub fn build() -> Self {
        let matchers = Category::MATCHABLE
            .into_iter()
            .map(|category| {
                let set = keywords::keyword_set(category);
                (category, CompiledMatcher::compile(&set))
            })
            .collect();
        MatcherRegistry { matchers }
    }

    pub fn matcher(&self, category: Category) -> Option<&CompiledMatcher> {
        self.matchers.get(&category)
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_all_matchable_categories() {
        let registry = MatcherRegistry::build();
        for category in Category::MATCHABLE {
            assert!(
                registry.matcher(category).is_some(),
                "{category} missing from registry"
            );
        }
        assert!(registry.matcher(Category::Simple).is_none());
    }

    #[test]
    fn single_token_respects_word_boundaries() {
        let registry = MatcherRegistry::build();
        let web = registry.matcher(Category::WebSearch).unwrap();
        assert_eq!(web.count_hits(&normalize("a notícia chegou")), 1);
        // "noticiarista" must not count as "noticia".
        assert_eq!(web.count_hits(&normalize("o noticiarista chegou")), 0);
    }

    #[test]
    fn accented_keyword_matches_unaccented_input() {
        let registry = MatcherRegistry::build();
        let web = registry.matcher(Category::WebSearch).unwrap();
        assert!(web.count_hits(&normalize("quais as noticias?")) >= 1);
    }

    #[test]
    fn phrase_hits_count_once_each() {
        let registry = MatcherRegistry::build();
        let web = registry.matcher(Category::WebSearch).unwrap();
        let hits = web.count_hits(&normalize("Quais as últimas notícias do Brasil hoje?"));
        // "últimas notícias" (phrase) + "notícias" + "hoje" at minimum.
        assert!(hits >= 3, "got {hits}");
    }

    #[test]
    fn negative_detection_uses_normalized_forms() {
        let registry = MatcherRegistry::build();
        let web = registry.matcher(Category::WebSearch).unwrap();
        assert!(web.has_negative(&normalize("Crie uma notícia sobre aliens")));
        assert!(!web.has_negative(&normalize("Quais as notícias de hoje?")));
    }

    #[test]
    fn repeated_token_counts_every_occurrence() {
        let registry = MatcherRegistry::build();
        let web = registry.matcher(Category::WebSearch).unwrap();
        assert_eq!(web.count_hits("noticia noticia noticia"), 3);
    }
}
