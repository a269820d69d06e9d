use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetbook::cli::{
    handle_budget_command, handle_category_command, handle_expense_command, handle_report_command,
    BudgetCommands, CategoryCommands, ExpenseCommands, ReportCommands,
};
use budgetbook::config::{BudgetBookPaths, Settings};
use budgetbook::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Terminal-based personal budget tracker",
    long_about = "BudgetBook is a terminal-based personal budget tracker. Define \
                  spending categories, set monthly budgets per category, log \
                  expenses, and view spending-vs-budget reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Initialize BudgetBook with starter categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetBookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing BudgetBook at: {}", paths.data_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Starter categories have been created:");
            println!("  Groceries, Transport, Dining Out, Entertainment, Utilities");
            println!();
            println!("Run 'budgetbook category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("BudgetBook Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Recent expense limit: {}", settings.recent_expense_limit);
        }
        None => {
            println!("BudgetBook - Terminal-based personal budget tracker");
            println!();
            println!("Run 'budgetbook --help' for usage information.");
            println!("Run 'budgetbook init' to get started.");
        }
    }

    Ok(())
}
