// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rumo route` command implementation.

use colored::Colorize;
use rumo_config::RumoConfig;
use rumo_core::RouteDecision;
use rumo_router::IntentRouter;

/// Runs `rumo route`: classify one utterance and print the decision.
pub fn run(
    config: &RumoConfig,
    text: &str,
    json: bool,
    scores: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = IntentRouter::new();
    let decision = router.route(text, &config.routing);

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        print_decision(&decision);
    }

    if scores {
        print_scores(&router, text);
    }
    Ok(())
}

pub fn print_decision(decision: &RouteDecision) {
    println!(
        "{} {}",
        "category:".dimmed(),
        decision.category.to_string().bold()
    );
    println!("{} {}", "model:".dimmed(), decision.model);
    println!("{} {}", "web_search:".dimmed(), decision.web_search);
    if let Some(effort) = decision.reasoning_effort {
        println!("{} {effort}", "reasoning_effort:".dimmed());
    }
}

fn print_scores(router: &IntentRouter, text: &str) {
    println!("{}", "scores:".dimmed());
    for (category, score) in router.scores(text).iter() {
        println!("  {category}: {score:.1}");
    }
}
