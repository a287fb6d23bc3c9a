//! Tests for the aggregation engine against hand-built profiles.

use accord_core::{
  consent::DataType,
  dataset::DatasetMetrics,
  profile::{ClientProfile, Transaction},
};
use chrono::{NaiveDate, TimeZone, Utc};

use super::*;

fn txn(id: &str, amount: f64, category: &str) -> Transaction {
  Transaction {
    id: id.into(),
    amount,
    category: category.into(),
    date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    merchant: "Somewhere".into(),
  }
}

/// The reference profile used throughout: five transactions in five
/// categories, totalling 31 000.
fn reference_profile() -> ClientProfile {
  ClientProfile {
    client_id:    "client_1".into(),
    name:         "Alice Hartwell".into(),
    age_group:    "25-35".into(),
    city:         "Northbridge".into(),
    balance:      150_000.0,
    transactions: vec![
      txn("t1", 2500.0, "Restaurants"),
      txn("t2", 5000.0, "Groceries"),
      txn("t3", 12000.0, "Electronics"),
      txn("t4", 3500.0, "Transport"),
      txn("t5", 8000.0, "Entertainment"),
    ],
  }
}

fn empty_profile() -> ClientProfile {
  ClientProfile {
    transactions: vec![],
    ..reference_profile()
  }
}

// ─── Category spend ──────────────────────────────────────────────────────────

#[test]
fn categories_group_and_sum_repeated_labels() {
  let m = category_spending(&[
    txn("t1", 100.0, "Groceries"),
    txn("t2", 250.0, "Transport"),
    txn("t3", 40.0, "Groceries"),
  ]);

  assert_eq!(m.total_categories, 2);
  assert_eq!(m.spending_by_category["Groceries"], 140.0);
  assert_eq!(m.spending_by_category["Transport"], 250.0);
  assert_eq!(m.total_spent, 390.0);
  assert_eq!(m.top_category.as_deref(), Some("Transport"));
}

#[test]
fn top_category_tie_goes_to_the_smaller_label() {
  let m = category_spending(&[
    txn("t1", 300.0, "Transport"),
    txn("t2", 300.0, "Groceries"),
  ]);
  assert_eq!(m.top_category.as_deref(), Some("Groceries"));

  // Same amounts fed in the opposite order must not change the answer.
  let m = category_spending(&[
    txn("t1", 300.0, "Groceries"),
    txn("t2", 300.0, "Transport"),
  ]);
  assert_eq!(m.top_category.as_deref(), Some("Groceries"));
}

#[test]
fn empty_history_has_no_top_category() {
  let m = category_spending(&[]);

  assert_eq!(m.top_category, None);
  assert_eq!(m.total_categories, 0);
  assert_eq!(m.total_spent, 0.0);
  assert!(m.spending_by_category.is_empty());
}

// ─── Average bill ────────────────────────────────────────────────────────────

#[test]
fn reference_history_statistics() {
  let m = average_bill(&reference_profile().transactions);

  assert_eq!(m.average_transaction_amount, 6200.0);
  assert_eq!(m.min_amount, 2500.0);
  assert_eq!(m.max_amount, 12000.0);
  assert_eq!(m.total_transactions, 5);
  assert_eq!(m.total_amount, 31000.0);
}

#[test]
fn mean_is_rounded_to_two_decimals() {
  let m = average_bill(&[
    txn("t1", 1.0, "Misc"),
    txn("t2", 2.0, "Misc"),
    txn("t3", 2.0, "Misc"),
  ]);
  // 5 / 3 = 1.666…
  assert_eq!(m.average_transaction_amount, 1.67);
}

#[test]
fn empty_history_yields_zeroed_statistics() {
  let m = average_bill(&[]);

  assert_eq!(m.average_transaction_amount, 0.0);
  assert_eq!(m.min_amount, 0.0);
  assert_eq!(m.max_amount, 0.0);
  assert_eq!(m.total_transactions, 0);
  assert_eq!(m.total_amount, 0.0);
}

#[test]
fn mean_times_count_recovers_the_total_within_rounding() {
  let amounts = [19.99, 4.50, 1203.75, 88.20, 7.05, 310.40];
  let transactions: Vec<_> = amounts
    .iter()
    .enumerate()
    .map(|(i, &a)| txn(&format!("t{i}"), a, "Misc"))
    .collect();

  let m = average_bill(&transactions);
  let recovered = m.average_transaction_amount * m.total_transactions as f64;
  // The mean lost at most half a cent per transaction to rounding.
  assert!((recovered - m.total_amount).abs() <= 0.005 * amounts.len() as f64);
}

// ─── Demographics ────────────────────────────────────────────────────────────

#[test]
fn demographics_pass_profile_attributes_through() {
  let m = demographic_summary(&reference_profile());

  assert_eq!(m.age_group, "25-35");
  assert_eq!(m.city, "Northbridge");
  assert_eq!(m.average_balance, 150_000.0);
  assert_eq!(m.client_count, 1);
}

// ─── Whole-profile aggregation ───────────────────────────────────────────────

#[test]
fn aggregate_profile_yields_the_three_kinds_once_each() {
  let generated_at = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
  let datasets = aggregate_profile(
    &reference_profile(),
    "Retail Analytics Pro",
    generated_at,
  );

  assert_eq!(datasets.len(), 3);
  let kinds: Vec<_> = datasets.iter().map(|d| d.data_type).collect();
  assert_eq!(
    kinds,
    vec![
      DataType::CategorySpending,
      DataType::AverageBill,
      DataType::AgeGroupStats,
    ]
  );

  for dataset in &datasets {
    assert_eq!(dataset.company, "Retail Analytics Pro");
    assert_eq!(dataset.sample_size, 1);
    assert_eq!(dataset.generated_at, generated_at);
    assert_eq!(dataset.metrics.data_type(), dataset.data_type);
  }
}

#[test]
fn aggregate_profile_is_total_even_for_an_empty_history() {
  let datasets =
    aggregate_profile(&empty_profile(), "FinTech Insights", Utc::now());

  assert_eq!(datasets.len(), 3);
  let Some(DatasetMetrics::AverageBill(bill)) = datasets
    .iter()
    .find(|d| d.data_type == DataType::AverageBill)
    .map(|d| &d.metrics)
  else {
    panic!("no average-bill dataset")
  };
  assert_eq!(bill.average_transaction_amount, 0.0);
  assert_eq!(bill.total_transactions, 0);
}

#[test]
fn datasets_carry_no_client_identity() {
  let profile = reference_profile();
  let json = serde_json::to_string(&aggregate_profile(
    &profile,
    "Market Research Co",
    Utc::now(),
  ))
  .unwrap();

  assert!(!json.contains(&profile.client_id));
  assert!(!json.contains(&profile.name));
}
