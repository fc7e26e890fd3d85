//! Functionality related to the `ngs-formats check` command itself.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use tracing::error;
use tracing::info;

use crate::catalog;

//========================//
// Command-line arguments //
//========================//

/// Command line arguments for `ngs-formats check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Name of the format of the primary file (see `ngs-formats list`).
    format: String,

    /// Path to the primary file.
    #[arg(value_name = "PATH")]
    src: PathBuf,

    /// A JSON file of additional format declarations.
    #[arg(short, long, value_name = "JSON")]
    formats: Option<PathBuf>,
}

//==============//
// Main command //
//==============//

/// Main method for the `ngs-formats check` subcommand. Ensures that the
/// primary file and every companion file required by its format are present.
pub fn check(args: CheckArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.formats)?;
    let format = catalog.get_by_name(&args.format)?;
    let src = args.src;

    info!("Checking {} as {}.", src.display(), format);

    if !src.exists() {
        bail!("primary file does not exist: {}", src.display());
    }

    let missing = format.missing_companions(&src)?;

    if missing.is_empty() {
        info!("All companion files for {} are present.", src.display());
        return Ok(());
    }

    for (pattern, path) in &missing {
        error!("Missing companion file ({}): {}", pattern, path.display());
    }

    bail!(
        "{} of {} companion file(s) required by {} are missing for {}",
        missing.len(),
        format.resolve_secondary_suffixes().len(),
        format,
        src.display()
    )
}
