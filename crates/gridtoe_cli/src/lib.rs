//! Terminal front end for gridtoe.
//!
//! Reads commands line by line, relays them to the engine, and prints the
//! board and status after each one. The opponent is a random agent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod session;
mod table;

pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, GameConfig};
pub use session::{Flow, handle, run};
pub use table::{Table, View, render};
