//! Hypergate CLI library.
//!
//! Subcommand handlers, terminal styling, and output formatting for the
//! hypergate command-line tool. The binary in `main.rs` only parses
//! arguments and dispatches into these modules.

pub mod commands;
pub mod output;
pub mod terminal;
