mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::{cmd_daily, cmd_list, cmd_period, cmd_reset, cmd_save};
use crate::config::Config;
use scalesync_core::models::Period;
use scalesync_core::{TimeOfDay, WeightStore};

#[derive(Parser)]
#[command(
    name = "scalesync",
    version,
    about = "Track your morning and night weight"
)]
struct Cli {
    /// Database file (default: weight_tracker.db in the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save today's morning weight
    Morning {
        /// Weight in kg
        #[arg(allow_hyphen_values = true)]
        weight: String,
    },
    /// Save today's night weight
    Night {
        /// Weight in kg
        #[arg(allow_hyphen_values = true)]
        weight: String,
    },
    /// Save today's weight for the given time of day
    Save {
        /// Weight in kg
        #[arg(allow_hyphen_values = true)]
        weight: String,
        /// Time of day: morning or night
        #[arg(short, long, default_value = "morning")]
        time: TimeOfDay,
    },
    /// Show today's morning, night and day's change
    Daily,
    /// Show the morning weight change over the last 7 days
    Weekly,
    /// Show the morning weight change over the last 30 days
    Monthly,
    /// List all entries, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every entry and compact the database
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.db)?;
    let store = WeightStore::new(config.db_path);
    store.initialize();

    match cli.command {
        Commands::Morning { weight } => cmd_save(&store, &weight, TimeOfDay::Morning),
        Commands::Night { weight } => cmd_save(&store, &weight, TimeOfDay::Night),
        Commands::Save { weight, time } => cmd_save(&store, &weight, time),
        Commands::Daily => {
            cmd_daily(&store);
            Ok(())
        }
        Commands::Weekly => {
            cmd_period(&store, Period::Weekly);
            Ok(())
        }
        Commands::Monthly => {
            cmd_period(&store, Period::Monthly);
            Ok(())
        }
        Commands::List { json } => cmd_list(&store, json),
        Commands::Reset { yes } => cmd_reset(&store, yes),
    }
}
