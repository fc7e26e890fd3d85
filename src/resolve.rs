//! Functionality related to the `ngs-formats resolve` subcommand.

pub mod command;
