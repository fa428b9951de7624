use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{Category, DateWindow, Transaction};

/// Income/savings/spend totals for the transactions inside a date window.
///
/// The three totals partition the filtered rows exactly: every row lands in
/// one bucket and only one.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub window: DateWindow,
    pub total_income: Decimal,
    pub total_savings: Decimal,
    pub total_spent: Decimal,
    /// Rows inside the window, kept for optional inspection.
    pub transactions: Vec<Transaction>,
}

/// Filters the table to the window and totals income, savings, and spend.
/// Returns `None` when no transaction falls inside the window.
pub fn summarize(transactions: &[Transaction], window: DateWindow) -> Option<Summary> {
    let in_range: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| window.contains(transaction.date))
        .cloned()
        .collect();
    if in_range.is_empty() {
        return None;
    }

    let mut total_income = Decimal::ZERO;
    let mut total_savings = Decimal::ZERO;
    let mut total_spent = Decimal::ZERO;
    for transaction in &in_range {
        match transaction.category {
            Category::Income => total_income += transaction.amount,
            Category::SavingsInvestments => total_savings += transaction.amount,
            // Anything neither income nor savings counts as spend.
            _ => total_spent += transaction.amount,
        }
    }

    Some(Summary {
        window,
        total_income,
        total_savings,
        total_spent,
        transactions: in_range,
    })
}
