//! Top-level interactive loop: add transactions, summarize a date range,
//! browse the derived charts, exit.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::ledger::{DateWindow, DATE_FORMAT};
use crate::report::{self, ChartKind};
use crate::store::CsvStore;

use super::{output, prompts, render, CommandError};

const MAIN_MENU: [&str; 4] = [
    "Add transaction",
    "View transaction summary within a date range",
    "View spending trends",
    "Exit",
];

const CHART_MENU: [&str; 5] = [
    "Cash flow",
    "Categorical expenses",
    "Sub-category expenses",
    "Monthly spending",
    "Back",
];

/// Runs the shell until the user chooses Exit. Invalid input never escapes a
/// prompt; only storage failures propagate.
pub fn run(store: &CsvStore) -> Result<(), CommandError> {
    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an option")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_transaction(store, &theme)?,
            1 => show_summary(store, &theme)?,
            2 => show_charts(store, &theme)?,
            _ => {
                output::info("Goodbye.");
                break;
            }
        }
    }
    Ok(())
}

fn add_transaction(store: &CsvStore, theme: &ColorfulTheme) -> Result<(), CommandError> {
    let transaction = prompts::collect_transaction(theme)?;
    store.append(&transaction)?;
    tracing::info!(
        date = %transaction.date,
        category = %transaction.category,
        "transaction recorded"
    );
    output::success("Transaction added successfully");
    Ok(())
}

fn show_summary(store: &CsvStore, theme: &ColorfulTheme) -> Result<(), CommandError> {
    output::info("Enter the start and end dates for the period to summarize (mm-dd-yyyy)");
    let window = prompt_window(theme)?;
    let transactions = store.read_all()?;

    match report::summarize(&transactions, window) {
        None => output::info(format!(
            "There are no transactions between {} and {}",
            window.start.format(DATE_FORMAT),
            window.end.format(DATE_FORMAT)
        )),
        Some(summary) => {
            println!("Total Income: ${}", summary.total_income);
            println!("Total Spent: ${}", summary.total_spent);
            println!("Total Savings: ${}", summary.total_savings);
            let inspect = Confirm::with_theme(theme)
                .with_prompt("Would you like to view the dataset?")
                .default(false)
                .interact()?;
            if inspect {
                render::transactions_table(&summary.transactions);
            }
        }
    }
    Ok(())
}

/// Re-prompts until both bounds parse and form a valid window.
fn prompt_window(theme: &ColorfulTheme) -> Result<DateWindow, CommandError> {
    loop {
        let start: String = Input::<String>::with_theme(theme)
            .with_prompt("Start Date")
            .interact_text()?;
        let end: String = Input::<String>::with_theme(theme)
            .with_prompt("End Date")
            .interact_text()?;
        match DateWindow::parse(&start, &end) {
            Ok(window) => return Ok(window),
            Err(err) => output::warning(err),
        }
    }
}

fn show_charts(store: &CsvStore, theme: &ColorfulTheme) -> Result<(), CommandError> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Which visual would you like to view?")
            .items(&CHART_MENU)
            .default(0)
            .interact()?;

        let kind = match choice {
            0 => ChartKind::CashFlow,
            1 => ChartKind::Categorical,
            2 => ChartKind::SubCategoryByMonth,
            3 => ChartKind::CumulativeComparison,
            _ => return Ok(()),
        };

        let transactions = store.read_all()?;
        render::render(&report::derive(kind, &transactions));
    }
}
