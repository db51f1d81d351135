//! fintrack CLI - a personal finance tracker for the terminal
//!
//! Presentation layer over `fintrack-core`: records income and expense
//! transactions in a file-backed ledger and renders the dashboard surfaces
//! (summary cards, category breakdown, monthly series) as subcommands.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::resolve(&cli)?;

    match &cli.command {
        Commands::Add(args) => commands::handle_add(&ctx, args),
        Commands::Edit(args) => commands::handle_edit(&ctx, args),
        Commands::Delete(args) => commands::handle_delete(&ctx, args),
        Commands::List(args) => commands::handle_list(&ctx, args),
        Commands::Summary(args) => commands::handle_summary(&ctx, args),
        Commands::Categories(args) => commands::handle_categories(&ctx, args),
        Commands::Monthly(args) => commands::handle_monthly(&ctx, args),
        Commands::Completions { shell } => commands::handle_completions(*shell),
    }
}
