//! Functionality related to the `ngs-formats check` subcommand.

pub mod command;
