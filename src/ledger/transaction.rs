use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;

/// Textual date format shared by the store and interactive entry.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// A single immutable ledger entry. Amounts are always positive; direction is
/// inferred from the category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: Category,
    pub sub_category: String,
    pub memo: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: Category,
        sub_category: impl Into<String>,
        memo: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            category,
            sub_category: sub_category.into(),
            memo: memo.into(),
            amount,
        }
    }

    /// Month number (1-12) used as the reporting period key.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of month, used for day-aligned cumulative comparisons.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Signed contribution to net cash flow: `+amount` for income, `-amount`
    /// for every other category.
    pub fn net_amount(&self) -> Decimal {
        if self.category.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }
}
