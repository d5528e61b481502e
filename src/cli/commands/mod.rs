//! CLI subcommands

pub mod analyze;
pub mod play;
pub mod verify;
