//! # Compose Command Implementation
//!
//! This module implements the `compose` subcommand, the main entry point for
//! generating a document from the unit library.
//!
//! ## Functionality
//!
//! - **Request Resolution**: Reads the optional request file and applies the
//!   `--profile`, `--target` and `--pack` overrides.
//! - **Composition**: Loads, merges and renders the selected units into the
//!   template.
//! - **Output**: Writes the document to `--output` (creating parent
//!   directories) or to stdout.
//! - **Check Mode**: With `--check`, compares against the existing output
//!   instead of writing, for use in CI.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{Globals, RequestArgs};
use mdcompose::defaults::{default_template_path, TEMPLATE_ENV};
use mdcompose::output::Marker;
use mdcompose::phases::{self, Composition};
use mdcompose::store::DirectoryStore;
use mdcompose::{suggestions, template};

/// Compose a document from a profile, targets and packs
#[derive(Args, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Where to write the composed document. Defaults to stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Template file to render into.
    ///
    /// Defaults to `templates/claude.md.tmpl` under the library root.
    #[arg(short, long, value_name = "FILE", env = TEMPLATE_ENV)]
    pub template: Option<PathBuf>,

    /// Fail if the output file is missing or differs, without writing it.
    #[arg(long, requires = "output")]
    pub check: bool,

    /// Do not print status lines.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the full composition for `args` against the library at `root`.
fn render(args: &ComposeArgs, root: &Path) -> Result<Composition> {
    if !args.request.is_given() {
        return Err(suggestions::missing_profile());
    }
    let request = args.request.load()?;
    let store = DirectoryStore::new(root);

    let template_path = args
        .template
        .clone()
        .unwrap_or_else(|| default_template_path(root));
    let template = template::from_file(&template_path)
        .map_err(|e| suggestions::explain(e, &store, root))?;

    phases::compose(&request, &store, &template, args.request.load_options())
        .map_err(|e| suggestions::explain(e, &store, root))
}

/// The current contents of `path`, or an empty string if it does not exist.
fn read_existing(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn write_output(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, document).with_context(|| format!("Failed to write {}", path.display()))
}

/// Execute the `compose` command.
pub fn execute(args: ComposeArgs, globals: &Globals) -> Result<()> {
    let composition = render(&args, &globals.root)?;
    let out = &globals.out;

    let Some(path) = &args.output else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(composition.document.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    if args.check {
        let existing = read_existing(path)?;
        if existing != composition.document {
            anyhow::bail!(
                "{} is out of date\n\n\
                 hint: Run the same command without --check to regenerate it",
                path.display()
            );
        }
        if !args.quiet {
            println!("{} {} is up to date", out.marker(Marker::Ok), path.display());
        }
        return Ok(());
    }

    write_output(path, &composition.document)?;
    if !args.quiet {
        println!("{} Wrote {}", out.marker(Marker::Ok), path.display());
    }
    Ok(())
}
