// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static Portuguese keyword lists, one submodule per category.
//!
//! Lists hold the raw, accented surface forms; the matcher compiler
//! normalizes them with the same pipeline applied to utterances. Entries
//! containing whitespace are treated as phrases, everything else as single
//! tokens. Negative keywords suppress predictable false positives: only
//! web_search and factual carry them.

mod complex;
mod creative;
mod factual;
mod mathematical;
mod web_search;

use rumo_core::Category;

const NO_KEYWORDS: &[&str] = &[];

/// The keyword and negative-keyword lists for one category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub keywords: &'static [&'static str],
    pub negatives: &'static [&'static str],
}

/// Look up the static keyword set for a category.
///
/// `Simple` returns empty lists: it is the residual outcome and must never
/// be matched by keyword evidence.
pub fn keyword_set(category: Category) -> KeywordSet {
    match category {
        Category::WebSearch => KeywordSet {
            keywords: web_search::KEYWORDS,
            negatives: web_search::NEGATIVES,
        },
        Category::Complex => KeywordSet {
            keywords: complex::KEYWORDS,
            negatives: NO_KEYWORDS,
        },
        Category::Factual => KeywordSet {
            keywords: factual::KEYWORDS,
            negatives: factual::NEGATIVES,
        },
        Category::Mathematical => KeywordSet {
            keywords: mathematical::KEYWORDS,
            negatives: NO_KEYWORDS,
        },
        Category::Creative => KeywordSet {
            keywords: creative::KEYWORDS,
            negatives: NO_KEYWORDS,
        },
        Category::Simple => KeywordSet {
            keywords: NO_KEYWORDS,
            negatives: NO_KEYWORDS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_matchable_category_has_keywords() {
        for category in Category::MATCHABLE {
            assert!(
                !keyword_set(category).keywords.is_empty(),
                "{category} should have keywords"
            );
        }
    }

    #[test]
    fn simple_has_no_keywords() {
        let set = keyword_set(Category::Simple);
        assert!(set.keywords.is_empty());
        assert!(set.negatives.is_empty());
    }

    #[test]
    fn negatives_exist_only_where_expected() {
        assert!(!keyword_set(Category::WebSearch).negatives.is_empty());
        assert!(!keyword_set(Category::Factual).negatives.is_empty());
        assert!(keyword_set(Category::Complex).negatives.is_empty());
        assert!(keyword_set(Category::Mathematical).negatives.is_empty());
        assert!(keyword_set(Category::Creative).negatives.is_empty());
    }

    #[test]
    fn no_blank_entries() {
        for category in Category::MATCHABLE {
            let set = keyword_set(category);
            for entry in set.keywords.iter().chain(set.negatives) {
                assert!(!entry.trim().is_empty(), "{category} has a blank entry");
            }
        }
    }
}
