//! Filetrack CLI - ft command

use anyhow::Result;
use clap::{Parser, Subcommand};
use ft_cli::cmd::{self, diff::DiffMode};
use ft_cli::config::{self, Overrides};
use ft_cli::shell::Shell;
use ft_cli::util;
use ft_core::VersionId;
use std::io::Write;
use std::path::PathBuf;

/// Filetrack - version history for a single file
#[derive(Parser)]
#[command(name = "ft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: ./ft.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tracked file (overrides config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Database file (overrides config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Keep history in memory only; nothing is written to the database
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Snapshot the tracked file as a new version
    Add,
    /// Restore a version as the tracked file
    Load {
        /// Version number
        version: u32,
    },
    /// Compare two versions line by line
    Compare {
        /// First version number
        left: u32,
        /// Second version number
        right: u32,
    },
    /// Search all versions for a keyword
    Search {
        /// Keyword to look for
        keyword: String,
    },
    /// Delete a version
    Remove {
        /// Version number
        version: u32,
    },
    /// List every version with hash and content
    Log {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive menu-driven shell
    Shell,
    /// Compare two arbitrary files
    Diff {
        /// First file
        file_a: PathBuf,
        /// Second file
        file_b: PathBuf,
        /// Compare word by word instead of line by line
        #[arg(long, conflicts_with = "unified")]
        words: bool,
        /// Show a unified diff
        #[arg(short = 'u', long)]
        unified: bool,
        /// Number of context lines for --unified (default: 3)
        #[arg(short = 'U', long, default_value = "3")]
        context: usize,
    },
    /// Show the effective configuration
    Config {
        /// Print an example config file
        #[arg(long)]
        example: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        tracked_file: cli.file.clone(),
        database: cli.db.clone(),
        ephemeral: cli.ephemeral,
    };
    let mut loaded = config::load(cli.config.as_deref())?;
    loaded.config = loaded.config.with_overrides(&overrides);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Commands that never open the history
    match &cli.command {
        Commands::Diff {
            file_a,
            file_b,
            words,
            unified,
            context,
        } => {
            let mode = if *unified {
                DiffMode::Unified { context: *context }
            } else if *words {
                DiffMode::Words
            } else {
                DiffMode::Lines
            };
            return cmd::diff::run(file_a, file_b, mode, &mut out);
        }
        Commands::Config { example } => {
            return cmd::config::run(&loaded, *example, &mut out);
        }
        _ => {}
    }

    let mut session = util::open_session(&loaded.config)?;

    let result = match cli.command {
        Commands::Add => cmd::add::run(&mut session, &mut out).map(drop),
        Commands::Load { version } => {
            cmd::load::run(&mut session, VersionId::new(version), &mut out).map(drop)
        }
        Commands::Compare { left, right } => cmd::compare::run(
            &session,
            VersionId::new(left),
            VersionId::new(right),
            &mut out,
        ),
        Commands::Search { keyword } => cmd::search::run(&session, &keyword, &mut out).map(drop),
        Commands::Remove { version } => {
            cmd::remove::run(&mut session, VersionId::new(version), &mut out).map(drop)
        }
        Commands::Log { json } => cmd::log::run(&session, json, &mut out),
        Commands::Shell => {
            let stdin = std::io::stdin();
            Shell::new(stdin.lock(), &mut out).run(&mut session)
        }
        Commands::Diff { .. } | Commands::Config { .. } => unreachable!("handled above"),
    };
    out.flush()?;

    // Persist even when the command reported an error
    session.close()?;
    result
}
