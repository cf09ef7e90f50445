//! Command line interface for inspecting and compiling figure folders.

mod commands;

pub use commands::{Cli, Commands, TerminalArg, run};
