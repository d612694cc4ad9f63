use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::run_menu;
use expense_tracker::config::paths::{DATA_FILE_ENV, DEFAULT_DATA_FILE};
use expense_tracker::config::{Settings, TrackerConfig, TrackerPaths};
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Log expenses and view monthly and category totals",
    long_about = "An interactive expense tracker. Expenses are kept in a JSON file \
                  and can be listed by month or totalled by category."
)]
struct Cli {
    /// Path to the expense data file
    #[arg(long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pretty_env_logger::init();

    let config = TrackerConfig::new(TrackerPaths::with_data_file(cli.data_file), Settings::default());
    let storage = Storage::new(&config.paths);
    log::info!("Using data file {}", storage.expenses.path().display());

    let service = ExpenseService::new(&storage, &config.settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&service, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
