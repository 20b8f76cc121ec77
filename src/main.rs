// src/main.rs

use clap::Parser;
use diary::cli::{Cli, Commands};
use diary::shell::Shell;
use diary::{commands, logging, CategoryStore, Config, Result};
use std::io;
use std::process::ExitCode;
use tracing::debug;

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.dir)?;
    config.ensure_data_dir()?;
    debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    let mut store = CategoryStore::open(&config)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Categories => commands::handle_categories(&store),
        Commands::Add { category, message } => commands::handle_add(&mut store, category, message),
        Commands::List { category } => commands::handle_list(&store, category),
        Commands::Search { category, date } => commands::handle_search(&store, category, &date),
        Commands::Edit { category, number, message } => {
            commands::handle_edit(&mut store, category, number, message)
        }
        Commands::Delete { category, number, yes } => {
            commands::handle_delete(&mut store, category, number, yes)
        }
        Commands::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(&mut store, config.user_name.clone(), stdin.lock(), io::stdout());
            shell.run()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
