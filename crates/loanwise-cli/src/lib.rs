//! loanwise-cli: command-line input collector and presentation layer.

pub mod cli;
pub mod commands;
pub mod input;
pub mod render;

pub use cli::{Cli, Command};
pub use commands::run;
