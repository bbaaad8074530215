use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Select};
use thiserror::Error;
use tracing::info;

use crate::cli::{output, prompts};
use crate::errors::LedgerError;
use crate::ledger::AddOutcome;
use crate::storage;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

enum MenuChoice {
    AddExpense,
    ShowSummary,
    Exit,
}

const MENU_ITEMS: &[&str] = &["Add an expense", "Show budget details", "Exit"];

/// Runs the interactive session against the default storage location.
pub fn run_shell() -> Result<(), ShellError> {
    let path = storage::default_data_path();
    run_with_path(&path)
}

/// Session lifecycle: load (or start fresh and prompt for a budget), loop
/// over the menu, save on the explicit exit choice.
pub fn run_with_path(path: &Path) -> Result<(), ShellError> {
    let theme = ColorfulTheme::default();
    let (mut ledger, outcome) = storage::load_ledger(path);

    output::section("Welcome to the Budget Tracker!");
    if outcome.needs_setup() {
        ledger.initial_budget = prompts::prompt_initial_budget(&theme)?;
    } else {
        output::info(format!(
            "Loaded saved budget: ${:.2} remaining.",
            ledger.balance()
        ));
    }
    info!(expenses = ledger.expenses.len(), "session started");

    loop {
        match main_menu(&theme)? {
            MenuChoice::AddExpense => {
                let description = prompts::prompt_description(&theme)?;
                let amount = prompts::prompt_amount(&theme)?;
                match ledger.add_expense(&description, amount) {
                    AddOutcome::Added {
                        description,
                        amount,
                    } => output::success(format!(
                        "Added new expense: {description}, amount: ${amount:.2}"
                    )),
                    AddOutcome::Accumulated { description, total } => output::success(format!(
                        "Updated expense: {description}, new amount: ${total:.2}"
                    )),
                }
            }
            MenuChoice::ShowSummary => {
                output::separator();
                output::info(ledger.format_summary());
                output::separator();
            }
            MenuChoice::Exit => {
                storage::save_ledger(&ledger, path)?;
                output::info("Exiting the Budget Tracker, ciao!");
                break;
            }
        }
    }
    Ok(())
}

fn main_menu(theme: &ColorfulTheme) -> Result<MenuChoice, ShellError> {
    let selection = Select::with_theme(theme)
        .with_prompt("What would you like to do?")
        .items(MENU_ITEMS)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => MenuChoice::AddExpense,
        1 => MenuChoice::ShowSummary,
        _ => MenuChoice::Exit,
    })
}
