//! CLI argument parsing for dailyread

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dr")]
#[command(author, version, about = "Rolling daily Quran reading tracker", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Directory that relative paths resolve against
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Without a subcommand, run the full update
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the ayah of the day, rewrite the README and advance the pointer
    Update,

    /// Print today's reading block without fetching or writing anything
    Preview,
}
