//! Functionality related to the `ngs-formats resolve` command itself.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use prettytable::{row, Table};
use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog;

//========================//
// Command-line arguments //
//========================//

/// Command line arguments for `ngs-formats resolve`.
#[derive(Args)]
pub struct ResolveArgs {
    /// Name of the format of the primary file (see `ngs-formats list`).
    format: String,

    /// Path to the primary file. The file does not need to exist.
    #[arg(value_name = "PATH")]
    src: PathBuf,

    /// A JSON file of additional format declarations.
    #[arg(short, long, value_name = "JSON")]
    formats: Option<PathBuf>,

    /// Prints the companion files as a JSON object instead of a table.
    #[arg(long)]
    json: bool,
}

//==============//
// Main command //
//==============//

/// Main method for the `ngs-formats resolve` subcommand.
pub fn resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.formats)?;
    let format = catalog.get_by_name(&args.format)?;

    debug!(
        "Resolving companion files for {} as {}.",
        args.src.display(),
        format
    );

    let companions = format.apply(&args.src).with_context(|| {
        format!(
            "deriving {} companion files for {}",
            format,
            args.src.display()
        )
    })?;

    if args.json {
        let object = companions
            .iter()
            .map(|(pattern, path)| {
                (
                    pattern.to_string(),
                    Value::String(path.display().to_string()),
                )
            })
            .collect::<Map<_, _>>();

        let output = serde_json::to_string_pretty(&object)?;
        println!("{}", output);
    } else {
        let mut table = Table::new();
        table.add_row(row!["Pattern", "Companion File"]);

        for (pattern, path) in &companions {
            table.add_row(row![pattern, path.display()]);
        }

        table.printstd();
    }

    Ok(())
}
