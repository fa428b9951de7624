use cashlog::ledger::{Category, DateWindow, Transaction, DATE_FORMAT};
use cashlog::report::{derive, summarize, ChartData, ChartKind};
use cashlog::store::CsvStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn txn(date: &str, category: Category, sub_category: &str, memo: &str, amount: &str) -> Transaction {
    Transaction::new(
        NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        category,
        sub_category,
        memo,
        amount.parse::<Decimal>().unwrap(),
    )
}

#[test]
fn recorded_transactions_flow_through_to_reports() {
    cashlog::init();

    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("transactions.csv"));
    store.initialize().unwrap();

    let entries = vec![
        txn("01-05-2024", Category::Income, "Income", "salary", "1000.00"),
        txn(
            "01-10-2024",
            Category::Essential,
            "Groceries",
            "weekly, with fruit",
            "200.50",
        ),
        txn("02-03-2024", Category::Essential, "Groceries", "", "150.25"),
    ];
    for entry in &entries {
        store.append(entry).unwrap();
    }

    // Round-trip: every field must come back exactly as written.
    let read_back = store.read_all().unwrap();
    assert_eq!(read_back, entries);

    let window = DateWindow::parse("01-01-2024", "01-31-2024").unwrap();
    let summary = summarize(&read_back, window).unwrap();
    assert_eq!(summary.total_income, Decimal::new(100000, 2));
    assert_eq!(summary.total_spent, Decimal::new(20050, 2));
    assert_eq!(summary.total_savings, Decimal::ZERO);

    match derive(ChartKind::CashFlow, &read_back) {
        ChartData::CashFlow(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].month, 1);
        }
        other => panic!("expected cash flow rows, got {other:?}"),
    }
}
