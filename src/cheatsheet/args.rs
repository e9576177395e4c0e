use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cs")]
#[command(about = "Keep cheat sheets of things worth remembering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Name of the list to operate on (defaults to the configured list)
    #[arg(short, long, global = true)]
    pub list: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the entries of a list
    #[command(alias = "s")]
    Show,

    /// List the names of all available lists
    #[command(alias = "ls")]
    Lists,

    /// Print the file paths backing a list
    Path,

    /// Replace a list with the contents of a JSON file
    Import {
        /// JSON document in the list format
        file: PathBuf,
    },

    /// Restore a list from its backup
    Restore,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-list)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
