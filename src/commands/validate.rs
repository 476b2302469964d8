//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks units
//! without producing a document.
//!
//! ## Functionality
//!
//! - **Request Validation**: Loads and merges every unit a composition
//!   request selects, then reports what the merge produced.
//! - **Library Audit**: With `--all`, checks every unit in the library, whether
//!   or not a request selects it, and reports one line per unit.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use super::{Globals, RequestArgs};
use mdcompose::output::{Marker, OutputConfig};
use mdcompose::phases::{self, UnitAudit};
use mdcompose::store::DirectoryStore;
use mdcompose::suggestions;

/// Validate a composition request or the whole unit library
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Validate every unit in the library instead of a single request.
    #[arg(long, conflicts_with_all = ["request", "profile", "targets", "packs"])]
    pub all: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, globals: &Globals) -> Result<()> {
    let store = DirectoryStore::new(&globals.root);
    if args.all {
        validate_library(&store, &globals.out)
    } else {
        validate_request(&args.request, &store, globals)
    }
}

fn validate_request(args: &RequestArgs, store: &DirectoryStore, globals: &Globals) -> Result<()> {
    let out = &globals.out;
    let request = args.load()?;
    println!(
        "{} Validating composition in {}",
        out.marker(Marker::Scan),
        globals.root.display()
    );

    let (active, sections) = phases::merge_request(&request, store, args.load_options())
        .map_err(|e| suggestions::explain(e, store, &globals.root))?;

    let stats = sections.stats();
    println!("{} All units loaded and merged", out.marker(Marker::Ok));
    println!("\n{} Composition Summary:", out.marker(Marker::Info));
    println!("   Profile: {}", active.profile);
    println!("   Targets: {}", list_or_none(&active.targets));
    println!("   Packs: {}", list_or_none(&active.packs));
    println!("   Units: {}", active.unit_count());
    println!("   Sections: {}", sections.len());
    println!("   Items seen: {}", stats.items);
    println!("   Items kept: {}", sections.node_count());
    println!("   Filtered by conditions: {}", stats.filtered);
    println!("   Duplicates dropped: {}", stats.duplicates);
    Ok(())
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn audit_line(out: &OutputConfig, audit: &UnitAudit) -> String {
    match &audit.error {
        None => format!(
            "{} {} '{}' ({} item(s))",
            out.marker(Marker::Ok),
            audit.kind,
            audit.name,
            audit.items
        ),
        Some(e) => format!("{} {} '{}': {}", out.marker(Marker::Error), audit.kind, audit.name, e),
    }
}

fn validate_library(store: &DirectoryStore, out: &OutputConfig) -> Result<()> {
    println!(
        "{} Validating unit library: {}",
        out.marker(Marker::Scan),
        store.root().display()
    );

    let audits = phases::audit(store)?;
    if audits.is_empty() {
        println!("{} No units found", out.marker(Marker::Warn));
        return Ok(());
    }

    for audit in &audits {
        println!("{}", audit_line(out, audit));
    }

    let failed = audits.iter().filter(|a| !a.is_ok()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} unit(s) failed validation", failed, audits.len());
    }
    println!("\n{} {} unit(s) valid", out.marker(Marker::Ok), audits.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdcompose::error::Error;
    use mdcompose::unit::UnitKind;
    use std::fs;
    use tempfile::TempDir;

    fn globals(dir: &TempDir) -> Globals {
        Globals {
            root: dir.path().to_path_buf(),
            out: OutputConfig { use_color: false },
        }
    }

    fn write_unit(dir: &TempDir, sub: &str, name: &str, content: &str) {
        let kind_dir = dir.path().join(sub);
        fs::create_dir_all(&kind_dir).unwrap();
        fs::write(kind_dir.join(format!("{name}.yml")), content).unwrap();
    }

    #[test]
    fn test_validate_request_ok() {
        let dir = TempDir::new().unwrap();
        write_unit(&dir, "profiles", "default", "kind: profile\nname: default\n");
        let args = ValidateArgs {
            request: RequestArgs {
                profile: Some("default".to_string()),
                ..Default::default()
            },
            all: false,
        };
        assert!(execute(args, &globals(&dir)).is_ok());
    }

    #[test]
    fn test_validate_request_missing_profile() {
        let dir = TempDir::new().unwrap();
        let args = ValidateArgs {
            request: RequestArgs::default(),
            all: false,
        };
        let err = execute(args, &globals(&dir)).unwrap_err();
        assert!(err.to_string().contains("missing 'profile'"));
    }

    #[test]
    fn test_validate_all_reports_failures() {
        let dir = TempDir::new().unwrap();
        write_unit(&dir, "profiles", "default", "kind: profile\nname: default\n");
        write_unit(&dir, "packs", "bun", "kind: target\nname: bun\n");
        let args = ValidateArgs {
            request: RequestArgs::default(),
            all: true,
        };
        let err = execute(args, &globals(&dir)).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 unit(s) failed validation");
    }

    #[test]
    fn test_audit_line_formats() {
        let out = OutputConfig { use_color: false };
        let ok = UnitAudit {
            kind: UnitKind::Pack,
            name: "bun".to_string(),
            items: 3,
            error: None,
        };
        assert_eq!(audit_line(&out, &ok), "[OK] pack 'bun' (3 item(s))");

        let failed = UnitAudit {
            kind: UnitKind::Pack,
            name: "bun".to_string(),
            items: 0,
            error: Some(Error::MissingProfile),
        };
        assert!(audit_line(&out, &failed).starts_with("[ERR] pack 'bun': "));
    }
}
