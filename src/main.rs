//! Boxpick CLI - warehouse pick-list aggregator
//!
//! Usage: boxpick [COMMAND]
//!
//! Commands:
//!   pick    Compute the warehouse pick list for a date
//!   dates   List the distinct order dates in the order feed
//!
//! Without a command, Boxpick opens an interactive date browser.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Pick { date, data }) => {
            commands::pick::cmd_pick(date, data, cli.json, cli.verbose, cli.color)
        }
        Some(Commands::Dates { data }) => {
            commands::dates::cmd_dates(data, cli.json, cli.verbose, cli.color)
        }
        None => commands::interactive::cmd_interactive(cli.json, cli.verbose, cli.color),
    }
}
