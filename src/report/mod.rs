//! Report engine: date-range summaries and chart-table derivations.
//!
//! All derived values (months, days, nets, cumulative sums) are computed on
//! read; nothing here is ever persisted.

pub mod charts;
pub mod summary;

pub use charts::{
    cash_flow_by_month, categorical_expenses, cumulative_comparison, derive, sub_category_by_month,
    CashFlowRow, CategoryRow, ChartData, ChartKind, Comparison, CumulativeComparison,
    CumulativePoint, MonthWrap, NetStatus, SpendingPace, SubCategoryRow,
};
pub use summary::{summarize, Summary};
