//! Functionality related to the `ngs-formats list` subcommand.

pub mod command;
