//! Per-category spend aggregation.

use std::collections::BTreeMap;

use accord_core::{dataset::CategorySpendingMetrics, profile::Transaction};

/// Sum transaction amounts per category label.
///
/// The top category is the one with the highest summed amount. The map
/// iterates in label order and only a strictly greater total displaces the
/// running best, so ties resolve to the lexicographically smaller label and
/// the result never depends on input order.
pub fn category_spending(
  transactions: &[Transaction],
) -> CategorySpendingMetrics {
  let mut spending_by_category: BTreeMap<String, f64> = BTreeMap::new();
  for t in transactions {
    *spending_by_category.entry(t.category.clone()).or_insert(0.0) += t.amount;
  }

  let mut top: Option<(&String, f64)> = None;
  for (category, &total) in &spending_by_category {
    if top.is_none_or(|(_, best)| total > best) {
      top = Some((category, total));
    }
  }

  CategorySpendingMetrics {
    top_category: top.map(|(category, _)| category.clone()),
    total_categories: spending_by_category.len(),
    total_spent: transactions.iter().map(|t| t.amount).sum(),
    spending_by_category,
  }
}
