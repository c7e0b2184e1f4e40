// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rumo shell` command implementation.
//!
//! Interactive REPL: each line is routed against the current configuration
//! snapshot from the [`ConfigStore`], so config replaced at runtime takes
//! effect on the next line without restarting the loop.

use colored::Colorize;
use rumo_config::{ConfigStore, RumoConfig};
use rumo_router::IntentRouter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::route::print_decision;

/// Runs the `rumo shell` interactive REPL.
pub fn run(config: RumoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::new(config);
    let router = IntentRouter::new();

    let mut rl = DefaultEditor::new()?;

    println!("{}", "rumo shell".bold().green());
    println!("Type {} to exit.\n", "/quit".yellow());

    let prompt = format!("{}> ", "rumo".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                // Fresh snapshot per line: runtime config replacement is
                // visible immediately.
                let snapshot = store.snapshot();
                let decision = router.route(trimmed, &snapshot.routing);
                print_decision(&decision);
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}
