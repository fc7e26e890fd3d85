//! Functionality related to the `ngs-formats list` command itself.

use std::path::PathBuf;

use clap::Args;
use itertools::Itertools;
use prettytable::{row, Table};

use crate::catalog;

//========================//
// Command-line arguments //
//========================//

/// Command line arguments for `ngs-formats list`.
#[derive(Args)]
pub struct ListArgs {
    /// A JSON file of additional format declarations.
    #[arg(short, long, value_name = "JSON")]
    formats: Option<PathBuf>,
}

//==============//
// Main command //
//==============//

/// Main method for the `ngs-formats list` subcommand.
pub fn list(args: ListArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.formats)?;

    let mut table = Table::new();
    table.add_row(row!["Name", "Parent", "Secondary Files"]);

    for format in catalog.iter() {
        table.add_row(row![
            format.name(),
            format.parent().map(|p| p.name()).unwrap_or("-"),
            format.resolve_secondary_suffixes().iter().join(" "),
        ]);
    }

    table.printstd();

    Ok(())
}
