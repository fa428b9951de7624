use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    config,
    errors::LedgerError,
    ledger::{Category, Transaction},
};

use super::Result;

const HEADERS: [&str; 5] = ["Date", "Category", "Sub-Category", "Memo", "Amount"];

/// Append-only CSV store holding the full transaction table. Rows are never
/// rewritten or deleted; insertion order is the only ordering.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the canonical location (`$CASHLOG_HOME`, else `~/.cashlog`),
    /// created with its header if missing.
    pub fn open_default() -> Result<Self> {
        let store = Self::new(config::transactions_file());
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the ledger file containing only the header row when the file
    /// does not exist yet.
    pub fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(HEADERS)?;
        writer.flush()?;
        tracing::info!(path = %self.path.display(), "created empty ledger store");
        Ok(())
    }

    /// Appends a single transaction to the end of the table.
    pub fn append(&self, transaction: &Transaction) -> Result<()> {
        self.initialize()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(CsvRecord::from(transaction))?;
        writer.flush()?;
        tracing::debug!(date = %transaction.date, category = %transaction.category, "appended transaction");
        Ok(())
    }

    /// Reads the full table in insertion order.
    pub fn read_all(&self) -> Result<Vec<Transaction>> {
        self.initialize()?;
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new().from_reader(file);
        let mut transactions = Vec::new();
        for (index, row) in reader.deserialize::<CsvRecord>().enumerate() {
            let record =
                row.map_err(|err| LedgerError::InvalidRecord(format!("row {}: {err}", index + 1)))?;
            if record.amount <= Decimal::ZERO {
                return Err(LedgerError::InvalidRecord(format!(
                    "row {}: amount must be positive, got {}",
                    index + 1,
                    record.amount
                )));
            }
            transactions.push(record.into());
        }
        Ok(transactions)
    }
}

/// On-disk row layout; header names are the ledger file contract.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date", with = "mdy_date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: Category,
    #[serde(rename = "Sub-Category")]
    sub_category: String,
    #[serde(rename = "Memo")]
    memo: String,
    #[serde(rename = "Amount")]
    amount: Decimal,
}

impl From<&Transaction> for CsvRecord {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date,
            category: transaction.category,
            sub_category: transaction.sub_category.clone(),
            memo: transaction.memo.clone(),
            amount: transaction.amount,
        }
    }
}

impl From<CsvRecord> for Transaction {
    fn from(record: CsvRecord) -> Self {
        Transaction::new(
            record.date,
            record.category,
            record.sub_category,
            record.memo,
            record.amount,
        )
    }
}

/// Dates are stored as `mm-dd-yyyy`, matching the interactive entry format.
mod mdy_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ledger::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
