//! Decision core CLI
//!
//! Feeds JSON observation files through the decision core, for driving
//! the bot from scripts and for inspecting decisions offline.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use ua_core::{decide_lobby_action, BotConfig, EventPriorities, LobbyContext};

#[derive(Parser)]
#[command(name = "ua")]
#[command(about = "Career automation decision core", long_about = None)]
struct Cli {
    /// Bot config JSON file (defaults used when omitted or unreadable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a training from a training-screen scan
    Train {
        /// Training request JSON file (schema_version, observations, ...)
        #[arg(long)]
        request: PathBuf,
    },

    /// Analyze a narrative event's options
    Event {
        /// Event request JSON file (schema_version, options, ...)
        #[arg(long)]
        request: PathBuf,
    },

    /// Decide the lobby action for one turn
    Lobby {
        /// Lobby context JSON file (year, turn, mood, energy, ...)
        #[arg(long)]
        context: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let output = match cli.command {
        Commands::Train { request } => {
            let request_json = fs::read_to_string(&request)
                .with_context(|| format!("reading {}", request.display()))?;
            let config_json = serde_json::to_string(&config)?;
            ua_core::select_training_json(&request_json, &config_json).map_err(|e| anyhow!(e))?
        }

        Commands::Event { request } => {
            let request_json = fs::read_to_string(&request)
                .with_context(|| format!("reading {}", request.display()))?;
            let priorities: &EventPriorities = &config.priorities;
            let priorities_json = serde_json::to_string(priorities)?;
            ua_core::analyze_event_json(&request_json, &priorities_json).map_err(|e| anyhow!(e))?
        }

        Commands::Lobby { context } => {
            let context_json = fs::read_to_string(&context)
                .with_context(|| format!("reading {}", context.display()))?;
            let lobby: LobbyContext =
                serde_json::from_str(&context_json).context("parsing lobby context")?;
            let action = decide_lobby_action(&lobby, &config);
            serde_json::to_string(&action)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> BotConfig {
    match path {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            BotConfig::load_or_default(path)
        }
        None => {
            log::debug!("No config file given; using defaults");
            BotConfig::default()
        }
    }
}
