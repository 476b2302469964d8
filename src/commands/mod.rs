//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `mdcompose` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `mdcompose` library.
//!
//! Commands that operate on a composition request share [`RequestArgs`].

pub mod completions;
pub mod compose;
pub mod ls;
pub mod tree;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use mdcompose::config::{self, CompositionRequest};
use mdcompose::output::OutputConfig;
use mdcompose::phases::LoadOptions;
use mdcompose::suggestions;

/// Settings from global flags, shared by every command.
#[derive(Debug)]
pub struct Globals {
    /// Unit library root
    pub root: PathBuf,
    /// Status line decoration
    pub out: OutputConfig,
}

/// Selects the units to compose, from a request file and/or flags.
#[derive(Args, Debug, Default)]
pub struct RequestArgs {
    /// Composition request file (YAML with profile, targets and packs).
    pub request: Option<PathBuf>,

    /// Profile unit to use; overrides the request file's profile.
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Target unit to layer on; repeatable. Replaces the request file's targets.
    #[arg(long = "target", value_name = "NAME")]
    pub targets: Vec<String>,

    /// Pack unit to layer on; repeatable. Replaces the request file's packs.
    #[arg(long = "pack", value_name = "NAME")]
    pub packs: Vec<String>,

    /// Load units one at a time instead of in parallel.
    #[arg(long)]
    pub sequential: bool,
}

impl RequestArgs {
    /// Whether anything selects a composition.
    pub fn is_given(&self) -> bool {
        self.request.is_some()
            || self.profile.is_some()
            || !self.targets.is_empty()
            || !self.packs.is_empty()
    }

    /// Build the composition request from the file (if any) and the flags.
    pub fn load(&self) -> Result<CompositionRequest> {
        let base = match &self.request {
            Some(path) => {
                if !path.exists() {
                    return Err(suggestions::request_not_found(path));
                }
                config::from_file(path)
                    .with_context(|| format!("Failed to load request from {}", path.display()))?
            }
            None => CompositionRequest::default(),
        };
        Ok(base.with_overrides(self.profile.clone(), self.targets.clone(), self.packs.clone()))
    }

    pub fn load_options(&self) -> LoadOptions {
        if self.sequential {
            LoadOptions::sequential()
        } else {
            LoadOptions::default()
        }
    }
}
