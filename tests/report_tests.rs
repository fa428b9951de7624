use cashlog::ledger::{Category, DateWindow, Transaction, DATE_FORMAT};
use cashlog::report::{
    cash_flow_by_month, categorical_expenses, cumulative_comparison, sub_category_by_month,
    summarize, MonthWrap, NetStatus, SpendingPace,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn txn(date: &str, category: Category, sub_category: &str, amount: i64) -> Transaction {
    Transaction::new(
        NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        category,
        sub_category,
        "",
        Decimal::from(amount),
    )
}

fn sample_table() -> Vec<Transaction> {
    vec![
        txn("01-05-2024", Category::Income, "Income", 1000),
        txn("01-10-2024", Category::Essential, "Groceries", 200),
        txn("02-03-2024", Category::Essential, "Groceries", 150),
    ]
}

#[test]
fn summary_matches_worked_example() {
    let window = DateWindow::parse("01-01-2024", "01-31-2024").unwrap();
    let summary = summarize(&sample_table(), window).expect("rows in range");

    assert_eq!(summary.total_income, Decimal::from(1000));
    assert_eq!(summary.total_spent, Decimal::from(200));
    assert_eq!(summary.total_savings, Decimal::ZERO);
    assert_eq!(summary.transactions.len(), 2);
}

#[test]
fn summary_totals_partition_the_window() {
    let table = vec![
        txn("03-01-2024", Category::Income, "Income", 900),
        txn("03-02-2024", Category::SavingsInvestments, "Roth IRA", 300),
        txn("03-05-2024", Category::Essential, "Medical", 120),
        txn("03-09-2024", Category::NonEssential, "Travel", 80),
        txn("04-01-2024", Category::Essential, "Groceries", 50),
    ];
    let window = DateWindow::parse("03-01-2024", "03-31-2024").unwrap();
    let summary = summarize(&table, window).unwrap();

    let window_total: Decimal = table
        .iter()
        .filter(|t| window.contains(t.date))
        .map(|t| t.amount)
        .sum();
    assert_eq!(
        summary.total_income + summary.total_spent + summary.total_savings,
        window_total
    );
    // Non-essential spend falls into the spend bucket, not savings.
    assert_eq!(summary.total_spent, Decimal::from(200));
    assert_eq!(summary.total_savings, Decimal::from(300));
}

#[test]
fn summary_of_empty_range_is_none() {
    let window = DateWindow::parse("06-01-2024", "06-30-2024").unwrap();
    assert!(summarize(&sample_table(), window).is_none());
}

#[test]
fn summary_window_is_inclusive_of_both_bounds() {
    let window = DateWindow::parse("01-05-2024", "01-10-2024").unwrap();
    let summary = summarize(&sample_table(), window).unwrap();
    assert_eq!(summary.transactions.len(), 2);
}

#[test]
fn cash_flow_matches_worked_example() {
    let rows = cash_flow_by_month(&sample_table());

    assert_eq!(rows.len(), 2);
    // Sorted by net descending, so January (1000 - 200) leads.
    assert_eq!(rows[0].month, 1);
    assert_eq!(rows[0].net_amount, Decimal::from(800));
    assert_eq!(rows[0].status, NetStatus::Positive);
    assert_eq!(rows[1].month, 2);
    assert_eq!(rows[1].net_amount, Decimal::from(-150));
    assert_eq!(rows[1].status, NetStatus::Negative);
}

#[test]
fn cash_flow_nets_reconcile_with_summary_totals() {
    let table = sample_table();
    let window = DateWindow::parse("01-01-2024", "12-31-2024").unwrap();
    let summary = summarize(&table, window).unwrap();

    let net_total: Decimal = cash_flow_by_month(&table)
        .iter()
        .map(|row| row.net_amount)
        .sum();
    assert_eq!(
        net_total,
        summary.total_income - (summary.total_spent + summary.total_savings)
    );
}

#[test]
fn categorical_expenses_exclude_income_and_sort_descending() {
    let table = vec![
        txn("01-05-2024", Category::Income, "Income", 5000),
        txn("01-06-2024", Category::NonEssential, "Shopping", 90),
        txn("01-07-2024", Category::Essential, "Groceries", 250),
        txn("01-08-2024", Category::SavingsInvestments, "Roth IRA", 400),
    ];
    let rows = categorical_expenses(&table);

    assert!(rows.iter().all(|row| !row.category.is_income()));
    let totals: Vec<Decimal> = rows.iter().map(|row| row.total).collect();
    let mut sorted = totals.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(totals, sorted);
    assert_eq!(rows[0].category, Category::SavingsInvestments);
}

#[test]
fn sub_category_rows_are_keyed_by_month_and_label() {
    let table = vec![
        txn("01-05-2024", Category::Income, "Income", 5000),
        txn("01-06-2024", Category::Essential, "Groceries", 100),
        txn("01-20-2024", Category::Essential, "Groceries", 50),
        txn("02-06-2024", Category::Essential, "Groceries", 75),
        txn("02-10-2024", Category::NonEssential, "Travel", 500),
    ];
    let rows = sub_category_by_month(&table);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].sub_category, "Travel");
    assert_eq!(rows[0].total, Decimal::from(500));
    let january_groceries = rows
        .iter()
        .find(|row| row.month == 1 && row.sub_category == "Groceries")
        .unwrap();
    assert_eq!(january_groceries.total, Decimal::from(150));
}

#[test]
fn cumulative_sums_are_monotonic_within_a_month() {
    let table = vec![
        txn("02-15-2024", Category::Essential, "Groceries", 40),
        txn("02-02-2024", Category::Essential, "Medical", 10),
        txn("02-08-2024", Category::NonEssential, "Gifts", 25),
        txn("01-03-2024", Category::Essential, "Groceries", 60),
    ];
    let comparison = cumulative_comparison(&table, MonthWrap::Wrap).unwrap();

    for series in [&comparison.current, &comparison.previous] {
        for pair in series.windows(2) {
            assert!(pair[1].cumulative >= pair[0].cumulative);
            assert!(pair[1].day >= pair[0].day);
        }
    }
}

#[test]
fn cumulative_comparison_reports_difference_and_pace() {
    // January: 100 by day 1, 180 by day 3. February: 150 by day 2.
    let table = vec![
        txn("01-01-2024", Category::Essential, "Groceries", 100),
        txn("01-03-2024", Category::Essential, "Medical", 80),
        txn("02-02-2024", Category::NonEssential, "Travel", 150),
    ];
    let comparison = cumulative_comparison(&table, MonthWrap::Wrap).unwrap();

    assert_eq!(comparison.current_month, 2);
    assert_eq!(comparison.previous_month, Some(1));
    assert_eq!(comparison.most_recent_day, 2);

    // Previous month's pace by day 2 was 100; current is 150.
    let result = comparison.comparison.unwrap();
    assert_eq!(result.difference, Decimal::from(-50));
    assert_eq!(result.pace, SpendingPace::MoreThanLastMonth);
}

#[test]
fn slower_spending_reports_at_or_below_pace() {
    let table = vec![
        txn("01-02-2024", Category::Essential, "Groceries", 300),
        txn("02-05-2024", Category::Essential, "Groceries", 120),
    ];
    let result = cumulative_comparison(&table, MonthWrap::Wrap)
        .unwrap()
        .comparison
        .unwrap();

    assert_eq!(result.difference, Decimal::from(180));
    assert_eq!(result.pace, SpendingPace::AtOrBelowLastMonth);
}

#[test]
fn missing_previous_history_is_flagged_not_zero() {
    // January's only spend lands after February's most recent day, so there
    // is no same-day pace to compare against.
    let table = vec![
        txn("01-10-2024", Category::Essential, "Groceries", 200),
        txn("02-03-2024", Category::Essential, "Groceries", 150),
    ];
    let comparison = cumulative_comparison(&table, MonthWrap::Wrap).unwrap();

    assert_eq!(comparison.current_month, 2);
    assert_eq!(comparison.most_recent_day, 3);
    assert!(comparison.comparison.is_none());
}

#[test]
fn january_predecessor_follows_the_wrap_policy() {
    let table = vec![txn("01-15-2024", Category::Essential, "Groceries", 75)];

    let wrapped = cumulative_comparison(&table, MonthWrap::Wrap).unwrap();
    assert_eq!(wrapped.previous_month, Some(12));
    assert!(wrapped.comparison.is_none());

    let strict = cumulative_comparison(&table, MonthWrap::Strict).unwrap();
    assert_eq!(strict.previous_month, None);
    assert!(strict.previous.is_empty());
    assert!(strict.comparison.is_none());
}
