//! Utilities that are used across the `ngs-formats` modules and subcommands.

pub mod diff;
pub mod pathbuf;
