//! CLI argument parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all
//! subcommands. Running without a subcommand enters interactive mode.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Boxpick - warehouse pick-list aggregator for gift-box orders
#[derive(Parser, Debug)]
#[command(name = "boxpick")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'boxpick' without arguments to browse dates interactively.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the warehouse pick list for a date
    Pick {
        /// Target date (YYYY-MM-DD); defaults to pick.default_date
        #[arg(short, long)]
        date: Option<String>,

        /// Directory holding orders.json and catalog.json
        #[arg(long, value_name = "DIR")]
        data: Option<PathBuf>,
    },

    /// List the distinct order dates in the order feed
    Dates {
        /// Directory holding orders.json and catalog.json
        #[arg(long, value_name = "DIR")]
        data: Option<PathBuf>,
    },
}
