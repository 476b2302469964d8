//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use mdcompose::defaults::{DEFAULT_ROOT, ROOT_ENV};
use mdcompose::output::OutputConfig;

/// mdcompose - Compose Markdown documents from reusable YAML units
#[derive(Parser, Debug)]
#[command(name = "mdcompose")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Root directory of the unit library (holds profiles/, targets/, packs/, templates/)
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = ROOT_ENV,
        default_value = DEFAULT_ROOT
    )]
    root: PathBuf,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a document from a profile, targets and packs
    Compose(commands::compose::ComposeArgs),

    /// Validate a composition request or the whole unit library
    Validate(commands::validate::ValidateArgs),

    /// List the units available in the library
    Ls(commands::ls::LsArgs),

    /// Show the merged section tree for a composition request
    Tree(commands::tree::TreeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Install the global logger.
///
/// `RUST_LOG`, when set, overrides `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let globals = commands::Globals {
            root: self.root,
            out: OutputConfig::from_env_and_flag(&self.color),
        };

        match self.command {
            Commands::Compose(args) => commands::compose::execute(args, &globals),
            Commands::Validate(args) => commands::validate::execute(args, &globals),
            Commands::Ls(args) => commands::ls::execute(args, &globals),
            Commands::Tree(args) => commands::tree::execute(args, &globals),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
