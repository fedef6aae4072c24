// SPDX-FileCopyrightText: 2026 Sevabot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sevabot - conversational service-intake agent.
//!
//! This is the binary entry point for the Sevabot agent.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod channel;
mod serve;

/// Sevabot - conversational service-intake agent.
#[derive(Parser, Debug)]
#[command(name = "sevabot", version, about, long_about = None)]
struct Cli {
    /// Path to a config file. Defaults to the XDG config hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the intake agent.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = {
        let loaded = match &cli.config {
            Some(path) => sevabot_config::load_and_validate_path(path),
            None => sevabot_config::load_and_validate(),
        };
        match loaded {
            Ok(config) => config,
            Err(errors) => {
                sevabot_config::render_errors(&errors);
                std::process::exit(1);
            }
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run(config).await {
                eprintln!("sevabot serve failed: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("sevabot: use --help for available commands");
        }
    }
}
