//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use amazonia_observability::LogFormat;

/// Inventory manager for Amazonian products.
///
/// Without a subcommand, starts the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "amazonia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the inventory file
    #[arg(global = true, short, long, env = "AMAZONIA_INVENTORY_FILE")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(global = true, short, long)]
    pub verbose: bool,

    /// Log rendering on stderr
    #[arg(global = true, long, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Add a new product
    Add {
        /// Unique product id
        id: String,
        /// Product name
        name: String,
        /// Units in stock
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: f64,
        /// Product category
        #[arg(short, long, default_value = "")]
        category: String,
    },

    /// Remove a product by id
    Remove {
        id: String,
    },

    /// Change quantity, price and/or category of a product
    Update {
        id: String,
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: Option<i64>,
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Find products whose name contains the given text (case-insensitive)
    Search {
        name: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show every product
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the total stock value
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
