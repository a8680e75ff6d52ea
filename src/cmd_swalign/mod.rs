//! Subcommand modules for the `swalign` binary.

pub mod align;
pub mod args;
pub mod matrix;
pub mod path;
