// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rumo - deterministic intent routing for a Portuguese voice assistant.
//!
//! This is the binary entry point for the Rumo CLI.

mod config_cmd;
mod route;
mod shell;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Rumo - deterministic intent routing for a Portuguese voice assistant.
#[derive(Parser, Debug)]
#[command(name = "rumo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single utterance and print the decision.
    Route {
        /// The utterance to classify.
        text: String,
        /// Print the decision as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
        /// Also print the per-category scores.
        #[arg(long)]
        scores: bool,
    },
    /// Launch an interactive routing REPL.
    Shell,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match rumo_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            rumo_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Route { text, json, scores }) => route::run(&config, &text, json, scores),
        Some(Commands::Shell) => shell::run(config),
        Some(Commands::Config) => config_cmd::run(&config),
        None => {
            println!("rumo: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Seed the subscriber from `agent.log_level`; `RUST_LOG` wins when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rumo={log_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
