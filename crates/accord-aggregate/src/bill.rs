//! Transaction-amount statistics.

use accord_core::{dataset::AverageBillMetrics, profile::Transaction};

/// Round to two decimal places, the precision the reported mean carries.
fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Mean, extremes, count, and total of the transaction amounts.
///
/// Every figure is 0 for an empty history; the mean's division is guarded,
/// never left to produce a NaN.
pub fn average_bill(transactions: &[Transaction]) -> AverageBillMetrics {
  let total_transactions = transactions.len();
  let total_amount: f64 = transactions.iter().map(|t| t.amount).sum();

  let average_transaction_amount = if total_transactions == 0 {
    0.0
  } else {
    round2(total_amount / total_transactions as f64)
  };

  let (min_amount, max_amount) = if transactions.is_empty() {
    (0.0, 0.0)
  } else {
    transactions.iter().map(|t| t.amount).fold(
      (f64::INFINITY, f64::NEG_INFINITY),
      |(lo, hi), amount| (lo.min(amount), hi.max(amount)),
    )
  };

  AverageBillMetrics {
    average_transaction_amount,
    min_amount,
    max_amount,
    total_transactions,
    total_amount,
  }
}
