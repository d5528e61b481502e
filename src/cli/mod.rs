//! CLI infrastructure for the engine
//!
//! This module provides the command-line interface for playing against the
//! engine, analyzing positions and verifying perfect play.

pub mod commands;
pub mod output;
