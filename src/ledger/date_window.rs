use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::LedgerError;

use super::transaction::DATE_FORMAT;

/// Inclusive date range used to scope summary queries.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds with the same format applied to stored dates, so
    /// window comparison stays order-consistent with chronology.
    pub fn parse(start: &str, end: &str) -> Result<Self, LedgerError> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        Self::new(start, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn parse_bound(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::InvalidInput(format!("invalid date `{}`; expected mm-dd-yyyy", raw.trim()))
    })
}
