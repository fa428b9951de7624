use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{Category, Transaction};

/// Chart tables the engine can derive from the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    CashFlow,
    Categorical,
    SubCategoryByMonth,
    CumulativeComparison,
}

/// Sign bucket used to color net cash flow bars.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum NetStatus {
    Positive,
    Negative,
}

/// Net cash flow for one month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CashFlowRow {
    pub month: u32,
    pub net_amount: Decimal,
    pub status: NetStatus,
}

/// Summed non-income spend for one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub total: Decimal,
}

/// Summed non-income spend for one (month, sub-category) pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubCategoryRow {
    pub month: u32,
    pub sub_category: String,
    pub total: Decimal,
}

/// One step of a month's running spend total, keyed by day of month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CumulativePoint {
    pub day: u32,
    pub cumulative: Decimal,
}

/// How the latest month's spend compares to the previous month at the same
/// point in the month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SpendingPace {
    MoreThanLastMonth,
    AtOrBelowLastMonth,
}

impl fmt::Display for SpendingPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpendingPace::MoreThanLastMonth => f.write_str("more than last month"),
            SpendingPace::AtOrBelowLastMonth => f.write_str("less than or equal to last month"),
        }
    }
}

/// `difference = prev_max_same_day - curr_max`; negative means the current
/// month is outspending the previous one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Comparison {
    pub difference: Decimal,
    pub pace: SpendingPace,
}

/// Day-aligned cumulative spend for the latest month and its predecessor.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CumulativeComparison {
    pub current_month: u32,
    /// `None` only under `MonthWrap::Strict` when the current month is January.
    pub previous_month: Option<u32>,
    pub current: Vec<CumulativePoint>,
    pub previous: Vec<CumulativePoint>,
    pub most_recent_day: u32,
    /// `None` when the previous month has no rows at or before
    /// `most_recent_day` — insufficient history, distinct from a zero
    /// difference.
    pub comparison: Option<Comparison>,
}

/// Whether January's predecessor is December or out of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthWrap {
    #[default]
    Wrap,
    Strict,
}

/// A derived chart table, one variant per `ChartKind`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    CashFlow(Vec<CashFlowRow>),
    Categorical(Vec<CategoryRow>),
    SubCategoryByMonth(Vec<SubCategoryRow>),
    /// `None` when no non-income rows exist at all.
    CumulativeComparison(Option<CumulativeComparison>),
}

/// Derives the table for `kind` from the full transaction table.
pub fn derive(kind: ChartKind, transactions: &[Transaction]) -> ChartData {
    match kind {
        ChartKind::CashFlow => ChartData::CashFlow(cash_flow_by_month(transactions)),
        ChartKind::Categorical => ChartData::Categorical(categorical_expenses(transactions)),
        ChartKind::SubCategoryByMonth => {
            ChartData::SubCategoryByMonth(sub_category_by_month(transactions))
        }
        ChartKind::CumulativeComparison => ChartData::CumulativeComparison(cumulative_comparison(
            transactions,
            MonthWrap::default(),
        )),
    }
}

/// Sums signed contributions per month. Rows are sorted by net amount
/// descending; display order, not chronological.
pub fn cash_flow_by_month(transactions: &[Transaction]) -> Vec<CashFlowRow> {
    let mut per_month: BTreeMap<u32, Decimal> = BTreeMap::new();
    for transaction in transactions {
        *per_month.entry(transaction.month()).or_insert(Decimal::ZERO) +=
            transaction.net_amount();
    }

    let mut rows: Vec<CashFlowRow> = per_month
        .into_iter()
        .map(|(month, net_amount)| CashFlowRow {
            month,
            net_amount,
            status: if net_amount < Decimal::ZERO {
                NetStatus::Negative
            } else {
                NetStatus::Positive
            },
        })
        .collect();
    rows.sort_by(|a, b| b.net_amount.cmp(&a.net_amount));
    rows
}

/// Groups non-income rows by category, largest total first.
pub fn categorical_expenses(transactions: &[Transaction]) -> Vec<CategoryRow> {
    let mut per_category: BTreeMap<Category, Decimal> = BTreeMap::new();
    for transaction in transactions.iter().filter(|t| !t.category.is_income()) {
        *per_category
            .entry(transaction.category)
            .or_insert(Decimal::ZERO) += transaction.amount;
    }

    let mut rows: Vec<CategoryRow> = per_category
        .into_iter()
        .map(|(category, total)| CategoryRow { category, total })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Groups non-income rows by (month, sub-category), largest total first.
pub fn sub_category_by_month(transactions: &[Transaction]) -> Vec<SubCategoryRow> {
    let mut per_pair: BTreeMap<(u32, String), Decimal> = BTreeMap::new();
    for transaction in transactions.iter().filter(|t| !t.category.is_income()) {
        *per_pair
            .entry((transaction.month(), transaction.sub_category.clone()))
            .or_insert(Decimal::ZERO) += transaction.amount;
    }

    let mut rows: Vec<SubCategoryRow> = per_pair
        .into_iter()
        .map(|((month, sub_category), total)| SubCategoryRow {
            month,
            sub_category,
            total,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Builds the day-aligned cumulative comparison between the latest month with
/// spend data and the month before it. Returns `None` when there is no
/// non-income data at all.
pub fn cumulative_comparison(
    transactions: &[Transaction],
    wrap: MonthWrap,
) -> Option<CumulativeComparison> {
    let spend: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| !t.category.is_income())
        .collect();
    let current_month = spend.iter().map(|t| t.month()).max()?;

    let previous_month = match (current_month, wrap) {
        (1, MonthWrap::Wrap) => Some(12),
        (1, MonthWrap::Strict) => None,
        (month, _) => Some(month - 1),
    };

    let current = cumulative_series(&spend, current_month);
    let previous = previous_month
        .map(|month| cumulative_series(&spend, month))
        .unwrap_or_default();

    // The current month came from the data, so its series is non-empty.
    let most_recent_day = current.last().map(|point| point.day).unwrap_or(0);
    let curr_max = current
        .last()
        .map(|point| point.cumulative)
        .unwrap_or(Decimal::ZERO);

    let prev_max_same_day = previous
        .iter()
        .filter(|point| point.day <= most_recent_day)
        .map(|point| point.cumulative)
        .max();

    let comparison = prev_max_same_day.map(|prev_max| {
        let difference = prev_max - curr_max;
        let pace = if difference < Decimal::ZERO {
            SpendingPace::MoreThanLastMonth
        } else {
            SpendingPace::AtOrBelowLastMonth
        };
        Comparison { difference, pace }
    });

    Some(CumulativeComparison {
        current_month,
        previous_month,
        current,
        previous,
        most_recent_day,
        comparison,
    })
}

/// Running cumulative sum of one month's spend, in day order.
fn cumulative_series(spend: &[&Transaction], month: u32) -> Vec<CumulativePoint> {
    let mut rows: Vec<&&Transaction> = spend.iter().filter(|t| t.month() == month).collect();
    rows.sort_by_key(|t| t.day());

    let mut running = Decimal::ZERO;
    rows.into_iter()
        .map(|transaction| {
            running += transaction.amount;
            CumulativePoint {
                day: transaction.day(),
                cumulative: running,
            }
        })
        .collect()
}
