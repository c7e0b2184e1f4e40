// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end routing behavior across the full pipeline.

use rumo_config::RoutingConfig;
use rumo_core::{Category, ReasoningEffort};
use rumo_router::IntentRouter;

fn router() -> IntentRouter {
    IntentRouter::new()
}

#[test]
fn classification_ignores_case_and_accents() {
    let router = router();
    let expected = router.classify("Quais as últimas notícias do Brasil hoje?");
    assert_eq!(expected, Category::WebSearch);
    assert_eq!(
        router.classify("QUAIS AS ULTIMAS NOTICIAS DO BRASIL HOJE?"),
        expected
    );
    assert_eq!(
        router.classify("quais as ultimas noticias do brasil hoje"),
        expected
    );
}

#[test]
fn keyword_inside_longer_word_does_not_match() {
    let router = router();
    // "noticiarista" contains "noticia" but must not trigger web search.
    assert_eq!(
        router.classify("O noticiarista chegou cedo"),
        Category::Simple
    );
}

#[test]
fn negative_keyword_short_circuits_category() {
    let router = router();
    // Creation verb suppresses web_search no matter how many news words follow.
    assert_eq!(
        router.classify("Crie uma notícia sobre as últimas notícias de hoje"),
        Category::Creative
    );
}

#[test]
fn weak_evidence_falls_through_to_simple() {
    let router = router();
    // One factual hit is 0.8, under the threshold.
    assert_eq!(router.classify("quando?"), Category::Simple);
    assert_eq!(router.classify("Bom dia!"), Category::Simple);
    assert_eq!(router.classify("obrigado"), Category::Simple);
}

#[test]
fn degenerate_inputs_are_simple() {
    let router = router();
    let routing = RoutingConfig::default();
    for text in ["", "   ", "?!?!...", "12345 678"] {
        let decision = router.route(text, &routing);
        assert_eq!(decision.category, Category::Simple, "input: {text:?}");
        assert_eq!(decision.model, routing.standard_model);
        assert!(!decision.web_search);
    }
}

#[test]
fn priority_resolves_ties_deterministically() {
    let router = router();
    // Math and complex evidence together routes to math, which sits
    // earlier in the priority walk when scores tie or math leads.
    assert_eq!(
        router.classify("Calcule e explique a raiz quadrada de 144"),
        Category::Mathematical
    );
}

#[test]
fn web_search_decision_with_defaults() {
    let router = router();
    let routing = RoutingConfig::default();
    let decision = router.route("Qual a previsão do tempo para amanhã?", &routing);
    assert_eq!(decision.category, Category::WebSearch);
    assert!(decision.web_search);
    // Default claude model keeps the request: Perplexity handles search.
    assert_eq!(decision.model, routing.standard_model);
    assert_eq!(decision.reasoning_effort, None);
}

#[test]
fn incapable_model_falls_back_for_search() {
    let router = router();
    let mut routing = RoutingConfig::default();
    routing.standard_model = "gpt-4.1-nano".to_string();
    let decision = router.route("Cotação do dólar hoje", &routing);
    assert_eq!(decision.category, Category::WebSearch);
    assert_eq!(decision.model, "gpt-4o-mini");
    assert_eq!(decision.reasoning_effort, None);
}

#[test]
fn gpt5_effort_applies_only_to_web_search() {
    let router = router();
    let mut routing = RoutingConfig::default();
    routing.premium_model = "gpt-5".to_string();
    routing.standard_model = "gpt-5".to_string();

    // Outside web search the effort stays absent.
    let decision = router.route("Explique a teoria da relatividade", &routing);
    assert_eq!(decision.category, Category::Complex);
    assert_eq!(decision.model, "gpt-5");
    assert_eq!(decision.reasoning_effort, None);
    assert!(!decision.web_search);

    // A web-search request on the same model gets the medium floor.
    let decision = router.route("Cotação do dólar hoje", &routing);
    assert_eq!(decision.category, Category::WebSearch);
    assert_eq!(decision.model, "gpt-5");
    assert_eq!(decision.reasoning_effort, Some(ReasoningEffort::Medium));
}

#[test]
fn category_override_beats_tier_mapping() {
    let router = router();
    let mut routing = RoutingConfig::default();
    routing
        .category_models
        .insert("mathematical".to_string(), "o4-mini".to_string());
    let decision = router.route("Quanto é 15% de 340?", &routing);
    assert_eq!(decision.category, Category::Mathematical);
    assert_eq!(decision.model, "o4-mini");
}

#[test]
fn same_input_same_decision() {
    let router = router();
    let routing = RoutingConfig::default();
    let texts = [
        "Quais as notícias de hoje?",
        "Sugira nomes para um gato",
        "Quem é o presidente?",
        "Olá, tudo bem?",
    ];
    for text in texts {
        let first = router.route(text, &routing);
        for _ in 0..5 {
            assert_eq!(router.route(text, &routing), first, "input: {text:?}");
        }
    }
}

#[test]
fn decision_serializes_to_snake_case_json() {
    let router = router();
    let decision = router.route("Quais as notícias de hoje?", &RoutingConfig::default());
    let json = serde_json::to_string(&decision).unwrap();
    assert!(json.contains("\"category\":\"web_search\""));
    assert!(json.contains("\"web_search\":true"));
}
