// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text normalization for keyword matching.
//!
//! Keywords and utterances must pass through the exact same pipeline or
//! matching silently degrades: lowercase, de-accent, de-punctuate, then a
//! coarse per-token Portuguese stemmer. The stemmer is deliberately
//! false-positive-tolerant; it exists so that "notícias" / "notícia" /
//! "noticiário" collapse toward a common matchable root, not to be
//! linguistically complete.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9\s]+").expect("static pattern")
});

/// Normalize text for matching.
///
/// Steps, in order, each total and side-effect-free:
/// 1. Lowercase.
/// 2. NFD-decompose, drop combining marks, NFC-recompose ("é" -> "e").
/// 3. Replace every run of non-alphanumeric characters with one space.
/// 4. Stem each whitespace-separated token, drop tokens that stem to
///    nothing ("mente" is an adverb suffix and a real verb form), rejoin
///    with single spaces.
///
/// Pure: identical input always yields identical output. Token rules that
/// return immediately are idempotent, but running the full pipeline twice is
/// not guaranteed to be a no-op for multi-step reductions; keyword lists are
/// tuned against single-pass behavior.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded = strip_accents(&lowered);
    let cleaned = NON_ALNUM.replace_all(&folded, " ");

    cleaned
        .split_whitespace()
        .map(stem)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove diacritical marks while preserving base letters.
fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Coarse Portuguese suffix stripper.
///
/// Rule order and length thresholds are frozen: the keyword lists were
/// normalized against this exact behavior, so "improving" the stemmer
/// silently changes which utterances match which category.
fn stem(word: &str) -> String {
    // Post-normalization tokens are ASCII, so byte length == char length.
    if word.len() < 4 {
        return word.to_string();
    }

    // Adverbs (mente)
    if let Some(root) = word.strip_suffix("mente") {
        return root.to_string();
    }

    // Plurals (s) -- strip and keep evaluating the remaining rules
    let word = word.strip_suffix('s').unwrap_or(word);

    // Gerund (ando, endo, indo)
    if let Some(root) = word.strip_suffix("ndo") {
        return root.to_string();
    }

    // Verbs / agent nouns (ar, er, ir, or)
    if ["ar", "er", "ir", "or"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 2].to_string();
    }

    // Diminutives (inho, inha)
    if word.ends_with("inho") || word.ends_with("inha") {
        return word[..word.len() - 4].to_string();
    }

    // Nasalized plural reconstruction: ões -> oes (post-accent-removal) -> ão
    if let Some(root) = word.strip_suffix("oes") {
        return format!("{root}ao");
    }

    word.to_string()
}
