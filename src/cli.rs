//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::commands;
use momo_status::config::Config;
use momo_status::core::models::{ProjectUpdate, StatusUpdate};
use momo_status::output::OutputMode;

/// momo-status - Update the timeline dashboard and publish it
#[derive(Parser, Debug)]
#[command(
    name = "momo-status",
    version,
    about = "Update the timeline dashboard and publish it",
    long_about = "Edit the dashboard's timeline.json (current activity, mood, project progress)\n\
                  and push the change so the site redeploys.\n\n\
                  Run with no command to show the current status."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Website checkout to operate on (overrides the config file)
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Read settings from this file instead of ~/.momo-status/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update the current status (only the given fields change)
    Status {
        /// What you are doing right now
        activity: Option<String>,

        /// Current mood
        #[arg(short, long)]
        mood: Option<String>,

        /// Active projects, comma separated (give the flag alone to clear)
        #[arg(long, num_args = 0.., value_delimiter = ',', value_name = "NAMES")]
        projects: Option<Vec<String>>,

        /// Today's tasks, comma separated (give the flag alone to clear)
        #[arg(long, num_args = 0.., value_delimiter = ',', value_name = "TASKS")]
        tasks: Option<Vec<String>>,
    },

    /// Update a project's progress or status
    Project {
        /// Project (event) ID
        id: String,

        /// Progress percentage, 0-100
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        progress: Option<u8>,

        /// New status label (e.g. active, completed, paused)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Commit and push the website so it redeploys
    Push,

    /// Show current status and projects
    Show,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let config = match cli.dir {
        Some(dir) => config.with_website_dir(dir),
        None => config,
    };

    match cli.command {
        None | Some(Command::Show) => commands::show(&config, output_mode),
        Some(Command::Status {
            activity,
            mood,
            projects,
            tasks,
        }) => {
            let update = StatusUpdate {
                activity,
                mood,
                projects,
                tasks,
            };
            commands::status(&config, update, output_mode)
        },
        Some(Command::Project { id, progress, status }) => {
            let update = ProjectUpdate { progress, status };
            commands::project(&config, &id, &update, output_mode)
        },
        Some(Command::Push) => commands::push(&config, output_mode).context("Publish failed"),
    }
}
