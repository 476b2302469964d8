//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the units stored
//! in the library, grouped by kind.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

use super::Globals;
use mdcompose::store::{DirectoryStore, UnitStore};
use mdcompose::unit::UnitKind;

/// List the units available in the library
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Only list units of this kind.
    #[arg(short, long, value_enum)]
    pub kind: Option<UnitKind>,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Unit names per kind, in kind order.
#[derive(Debug, Serialize)]
struct Listing(BTreeMap<UnitKind, Vec<String>>);

fn collect<S: UnitStore + ?Sized>(store: &S, filter: Option<UnitKind>) -> Result<Listing> {
    let kinds: Vec<UnitKind> = match filter {
        Some(kind) => vec![kind],
        None => UnitKind::ALL.to_vec(),
    };
    let mut listing = BTreeMap::new();
    for kind in kinds {
        listing.insert(kind, store.list(kind)?);
    }
    Ok(Listing(listing))
}

fn format_text(listing: &Listing) -> String {
    let mut out = String::new();
    for (kind, names) in &listing.0 {
        out.push_str(&format!("{}s:\n", kind));
        if names.is_empty() {
            out.push_str("  (none)\n");
        }
        for name in names {
            out.push_str(&format!("  {}\n", name));
        }
    }
    out
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs, globals: &Globals) -> Result<()> {
    let store = DirectoryStore::new(&globals.root);
    let listing = collect(&store, args.kind)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", format_text(&listing));
    }
    Ok(())
}
