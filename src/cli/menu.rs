use std::io::{self, BufRead};

use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::{output, CliError};
use crate::core::{ExpenseStore, MonthlyReport, ReportService, Validator};
use crate::domain::Category;

const SCRIPT_MODE_ENV_VAR: &str = "EXPENSE_TRACKER_CLI_SCRIPT";
const ADDED_MESSAGE: &str = "Expense added successfully!";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CliMode {
    Interactive,
    Script,
}

/// Runs the terminal front end until the user exits.
///
/// Interactive mode drives a looping menu with prompts. Setting
/// `EXPENSE_TRACKER_CLI_SCRIPT` switches to script mode, which reads newline
/// commands from stdin (`add <category> <amount> <date>`, `list`,
/// `report [date]`, `exit`).
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut store = ExpenseStore::new();
    match mode {
        CliMode::Interactive => run_interactive(&mut store),
        CliMode::Script => run_script(&mut store),
    }
}

fn run_interactive(store: &mut ExpenseStore) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    output::section("Personal Expense Tracker");

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an option")
            .items(&[
                "Add an expense",
                "View all expenses",
                "Generate monthly report",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => prompt_expense(store, &theme)?,
            1 => render_expenses(store),
            2 => render_report(store),
            _ => {
                output::info("Exiting... Goodbye!");
                break;
            }
        }
    }

    Ok(())
}

fn run_script(store: &mut ExpenseStore) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !handle_script_line(store, &line) {
            break;
        }
    }
    Ok(())
}

/// Executes one script-mode line; returns false once `exit` is seen.
fn handle_script_line(store: &mut ExpenseStore, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => true,
        &["add", category, amount, date] => {
            // A non-numeric amount falls through to the amount rule.
            let amount = amount.parse::<f64>().unwrap_or(f64::NAN);
            record_expense(store, category, amount, date);
            true
        }
        ["list"] => {
            render_expenses(store);
            true
        }
        ["report"] => {
            render_report(store);
            true
        }
        &["report", date] => {
            match Validator::parse_date(date) {
                Ok(reference) => render_report_at(store, reference),
                Err(error) => output::error(error),
            }
            true
        }
        ["exit"] => {
            output::info("Exiting... Goodbye!");
            false
        }
        _ => {
            output::warning(format!("Unknown command: {}", line.trim()));
            true
        }
    }
}

fn prompt_expense(store: &mut ExpenseStore, theme: &ColorfulTheme) -> Result<(), CliError> {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    let amount: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .interact_text()?;
    let amount = amount.trim().parse::<f64>().unwrap_or(f64::NAN);

    let date: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .interact_text()?;

    record_expense(store, labels[picked], amount, &date);
    Ok(())
}

fn record_expense(store: &mut ExpenseStore, category: &str, amount: f64, date: &str) {
    match Validator::validate(category, amount, date) {
        Ok(expense) => {
            store.append(expense);
            output::success(ADDED_MESSAGE);
        }
        Err(error) => output::error(error),
    }
}

fn render_expenses(store: &ExpenseStore) {
    output::section("All Expenses");
    if store.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    for (index, expense) in store.iter().enumerate() {
        output::info(format!(
            "{}. Category: {}, Amount: {}, Date: {}",
            index + 1,
            expense.category,
            expense.amount,
            expense.date
        ));
    }
}

fn render_report(store: &ExpenseStore) {
    render_report_at(store, Utc::now().date_naive());
}

fn render_report_at(store: &ExpenseStore, reference: chrono::NaiveDate) {
    output::section("Monthly Report");
    match ReportService::monthly_report(store, reference) {
        MonthlyReport::Empty => output::info(MonthlyReport::EMPTY_MESSAGE),
        MonthlyReport::Summary(summary) => {
            output::info(format!(
                "Highest Spending Category: {}",
                summary.highest_spending_category
            ));
            output::info(format!(
                "Total Amount Spent in the Last 30 Days: {}",
                summary.total_spent
            ));
            output::info("Category Totals:");
            for entry in &summary.category_totals {
                output::info(format!("  {}: {}", entry.category, entry.total));
            }
        }
    }
}
