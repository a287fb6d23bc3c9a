//! Aggregated datasets — the anonymized statistical summaries served to
//! partner companies.
//!
//! A dataset record carries no client identity. Attribution to the consent
//! that produced it lives only in the [`DatasetKey`] backends index by, so a
//! record handed to a partner stays anonymized as-is.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consent::DataType;

// ─── Metric payloads ─────────────────────────────────────────────────────────

/// Per-category spend totals plus summary figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpendingMetrics {
  pub spending_by_category: BTreeMap<String, f64>,
  /// The category with the highest summed amount. Ties resolve to the
  /// lexicographically smaller label; `None` when the history is empty.
  pub top_category:         Option<String>,
  pub total_categories:     usize,
  pub total_spent:          f64,
}

/// Transaction-amount statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageBillMetrics {
  /// Arithmetic mean rounded to two decimal places; 0 for an empty history.
  pub average_transaction_amount: f64,
  pub min_amount:                 f64,
  pub max_amount:                 f64,
  pub total_transactions:         usize,
  pub total_amount:               f64,
}

/// Demographic attributes of the contributing client, passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsMetrics {
  pub age_group:       String,
  pub city:            String,
  pub average_balance: f64,
  /// How many clients feed this aggregate. One, until cohorts are merged.
  pub client_count:    u32,
}

// ─── DatasetMetrics ──────────────────────────────────────────────────────────

/// The typed payload of a dataset.
///
/// Untagged: each variant serializes as the flat metrics mapping partners
/// consume, with the dataset's `data_type` field as the discriminant. The
/// three payload field sets are disjoint, so deserialization stays
/// unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetMetrics {
  CategorySpending(CategorySpendingMetrics),
  AverageBill(AverageBillMetrics),
  Demographics(DemographicsMetrics),
}

impl DatasetMetrics {
  /// The data-type label recorded alongside this payload.
  pub fn data_type(&self) -> DataType {
    match self {
      Self::CategorySpending(_) => DataType::CategorySpending,
      Self::AverageBill(_) => DataType::AverageBill,
      Self::Demographics(_) => DataType::AgeGroupStats,
    }
  }
}

// ─── AggregatedDataset ───────────────────────────────────────────────────────

/// One anonymized summary produced for a partner company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedDataset {
  pub company:      String,
  pub data_type:    DataType,
  pub metrics:      DatasetMetrics,
  /// Count of clients contributing to the figures. Always 1 here; a
  /// multi-client cohort merge would raise it.
  pub sample_size:  u32,
  pub generated_at: DateTime<Utc>,
}

// ─── DatasetKey ──────────────────────────────────────────────────────────────

/// Storage key attributing a dataset to the consent that produced it.
/// Distinct clients granting to the same company never collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetKey {
  pub client_id: String,
  pub company:   String,
  pub data_type: DataType,
}

impl DatasetKey {
  pub fn new(
    client_id: impl Into<String>,
    company: impl Into<String>,
    data_type: DataType,
  ) -> Self {
    Self {
      client_id: client_id.into(),
      company: company.into(),
      data_type,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn bill_metrics() -> DatasetMetrics {
    DatasetMetrics::AverageBill(AverageBillMetrics {
      average_transaction_amount: 6200.0,
      min_amount:                 2500.0,
      max_amount:                 12000.0,
      total_transactions:         5,
      total_amount:               31000.0,
    })
  }

  #[test]
  fn metrics_serialize_flat_without_a_tag() {
    let value = serde_json::to_value(bill_metrics()).unwrap();
    assert_eq!(
      value,
      json!({
        "average_transaction_amount": 6200.0,
        "min_amount": 2500.0,
        "max_amount": 12000.0,
        "total_transactions": 5,
        "total_amount": 31000.0,
      })
    );
  }

  #[test]
  fn metrics_deserialize_by_field_shape() {
    let metrics: DatasetMetrics = serde_json::from_value(json!({
      "age_group": "25-35",
      "city": "Northbridge",
      "average_balance": 150000.0,
      "client_count": 1,
    }))
    .unwrap();

    assert!(matches!(metrics, DatasetMetrics::Demographics(_)));
    assert_eq!(metrics.data_type(), DataType::AgeGroupStats);
  }

  #[test]
  fn payload_kinds_map_to_their_labels() {
    let category = DatasetMetrics::CategorySpending(CategorySpendingMetrics {
      spending_by_category: BTreeMap::new(),
      top_category:         None,
      total_categories:     0,
      total_spent:          0.0,
    });
    assert_eq!(category.data_type(), DataType::CategorySpending);
    assert_eq!(bill_metrics().data_type(), DataType::AverageBill);
  }

  #[test]
  fn dataset_record_serializes_with_wire_labels() {
    let dataset = AggregatedDataset {
      company:      "Retail Analytics Pro".into(),
      data_type:    DataType::AverageBill,
      metrics:      bill_metrics(),
      sample_size:  1,
      generated_at: Utc::now(),
    };

    let value = serde_json::to_value(&dataset).unwrap();
    assert_eq!(value["data_type"], "average_bill");
    assert_eq!(value["sample_size"], 1);
    assert_eq!(value["metrics"]["total_amount"], 31000.0);
    assert!(value["metrics"].get("client_id").is_none());
  }

  #[test]
  fn keys_order_by_client_then_company_then_kind() {
    let a =
      DatasetKey::new("client_1", "FinTech Insights", DataType::AverageBill);
    let b = DatasetKey::new(
      "client_1",
      "Retail Analytics Pro",
      DataType::CategorySpending,
    );
    let c = DatasetKey::new(
      "client_2",
      "FinTech Insights",
      DataType::CategorySpending,
    );

    assert!(a < b);
    assert!(b < c);
  }
}
