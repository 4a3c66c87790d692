//! Command-line front end for the Amazonian products inventory.
//!
//! Two ways in: the interactive menu (options 1–7) and one-shot subcommands
//! for scripting. Both drive the same [`amazonia_inventory::Inventory`].

pub mod args;
pub mod commands;
pub mod config;
pub mod menu;
pub mod messages;
pub mod prompt;

pub use args::{Cli, Command, OutputFormat};
pub use config::Config;
