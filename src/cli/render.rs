//! Textual chart renderer: draws each derived table as aligned rows with
//! width-scaled bars. Pure display; nothing here feeds back into the engine.

use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::{Transaction, DATE_FORMAT};
use crate::report::{
    CashFlowRow, CategoryRow, ChartData, CumulativeComparison, NetStatus, SpendingPace,
    SubCategoryRow,
};

use super::output;

const BAR_WIDTH: usize = 40;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

fn month_abbr(month: u32) -> &'static str {
    &month_name(month)[..3]
}

fn bar(value: Decimal, max: Decimal) -> String {
    if max <= Decimal::ZERO {
        return String::new();
    }
    let ratio = (value.abs() / max).to_f64().unwrap_or(0.0);
    let width = (ratio * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.min(BAR_WIDTH))
}

/// Draws the derived table for display.
pub fn render(data: &ChartData) {
    match data {
        ChartData::CashFlow(rows) => render_cash_flow(rows),
        ChartData::Categorical(rows) => render_categorical(rows),
        ChartData::SubCategoryByMonth(rows) => render_sub_categories(rows),
        ChartData::CumulativeComparison(None) => {
            output::info("No expenses recorded yet.");
        }
        ChartData::CumulativeComparison(Some(comparison)) => render_cumulative(comparison),
    }
}

fn render_cash_flow(rows: &[CashFlowRow]) {
    output::section("Monthly Cash Flow");
    if rows.is_empty() {
        output::info("No transactions recorded yet.");
        return;
    }
    let max = rows
        .iter()
        .map(|row| row.net_amount.abs())
        .max()
        .unwrap_or_default();
    for row in rows {
        let line = format!(
            "{:<4} {:>12} {}",
            month_abbr(row.month),
            format!("${}", row.net_amount),
            bar(row.net_amount, max)
        );
        match row.status {
            NetStatus::Positive => println!("{}", line.bright_green()),
            NetStatus::Negative => println!("{}", line.bright_red()),
        }
    }
}

fn render_categorical(rows: &[CategoryRow]) {
    output::section("Categorical Expenses");
    if rows.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    let max = rows.iter().map(|row| row.total).max().unwrap_or_default();
    for row in rows {
        println!(
            "{:<22} {:>12} {}",
            row.category,
            format!("${}", row.total),
            bar(row.total, max)
        );
    }
}

fn render_sub_categories(rows: &[SubCategoryRow]) {
    output::section("Sub-Category Expenses");
    if rows.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    let max = rows.iter().map(|row| row.total).max().unwrap_or_default();
    for row in rows {
        println!(
            "{:<4} {:<20} {:>12} {}",
            month_abbr(row.month),
            row.sub_category,
            format!("${}", row.total),
            bar(row.total, max)
        );
    }
}

fn render_cumulative(comparison: &CumulativeComparison) {
    output::section(format!("{} Spending", month_name(comparison.current_month)));
    for point in &comparison.current {
        println!("Day {:>2}  ${}", point.day, point.cumulative);
    }
    if let Some(previous_month) = comparison.previous_month {
        if !comparison.previous.is_empty() {
            output::info(format!("{} for comparison:", month_name(previous_month)));
            for point in &comparison.previous {
                println!("Day {:>2}  ${}", point.day, point.cumulative);
            }
        }
    }
    match &comparison.comparison {
        Some(result) => {
            let text = format!("${} {}", result.difference.abs(), result.pace);
            match result.pace {
                SpendingPace::MoreThanLastMonth => println!("{}", text.bright_red()),
                SpendingPace::AtOrBelowLastMonth => println!("{}", text.bright_green()),
            }
        }
        None => output::warning(
            "Insufficient history: no spending recorded this early in the previous month.",
        ),
    }
}

/// Plain aligned listing of the rows a summary matched.
pub fn transactions_table(transactions: &[Transaction]) {
    println!(
        "{:<12} {:<22} {:<20} {:<30} {:>10}",
        "Date", "Category", "Sub-Category", "Memo", "Amount"
    );
    for transaction in transactions {
        println!(
            "{:<12} {:<22} {:<20} {:<30} {:>10}",
            transaction.date.format(DATE_FORMAT).to_string(),
            transaction.category.to_string(),
            transaction.sub_category,
            transaction.memo,
            format!("${}", transaction.amount)
        );
    }
}
