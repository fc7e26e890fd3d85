use clap::{Args, Parser, Subcommand};

use ngs_formats::check::command::{check, CheckArgs};
use ngs_formats::list::command::{list, ListArgs};
use ngs_formats::resolve::command::{resolve, ResolveArgs};

use git_testament::{git_testament, render_testament};

git_testament!(TESTAMENT);

/// Verbosity arguments shared by every subcommand.
#[derive(Args)]
struct Verbosity {
    /// Only errors are printed to the stderr stream.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// All available information, including debug information, is printed to
    /// stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Inspects the catalog of NGS file formats and their companion files.
#[derive(Parser)]
#[command(name = "ngs-formats", version = render_testament!(TESTAMENT), propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    subcommand: Subcommands,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Subcommand)]
enum Subcommands {
    /// Lists every known format along with its secondary files.
    List(ListArgs),

    /// Derives the companion file paths for a primary file.
    Resolve(ResolveArgs),

    /// Checks that every companion file of a primary file is present.
    Check(CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut level = tracing::Level::INFO;
    if cli.verbosity.quiet {
        level = tracing::Level::ERROR;
    } else if cli.verbosity.verbose {
        level = tracing::Level::DEBUG;
    }

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.subcommand {
        Subcommands::List(args) => list(args),
        Subcommands::Resolve(args) => resolve(args),
        Subcommands::Check(args) => check(args),
    }
}
