use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockz", bin_name = "stockz", version)]
#[command(about = "File-backed inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to read and write (defaults to the configured data-file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add units of an item
    #[command(alias = "a")]
    Add {
        /// Item name
        item: String,

        /// Number of units to add
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },

    /// Remove units of an item
    #[command(alias = "rm")]
    Remove {
        /// Item name
        item: String,

        /// Number of units to remove
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },

    /// Print the quantity on hand for an item
    #[command(alias = "q")]
    Qty {
        /// Item name
        item: String,
    },

    /// List items below the low-stock threshold
    Low {
        /// Override the configured threshold
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<i64>,
    },

    /// Print every item and its quantity
    #[command(alias = "ls")]
    Report,

    /// Run the demonstration sequence (the default with no subcommand)
    Demo,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, low-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
