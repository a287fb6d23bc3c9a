//! Aggregation engine for Accord.
//!
//! Computes the anonymized summaries a consent authorizes from one client's
//! profile. Pure synchronous; no store or runtime dependencies, and no
//! failure modes — an empty transaction history yields zeroed metrics, never
//! an error.
//!
//! # Quick start
//!
//! ```
//! use accord_aggregate::aggregate_profile;
//! use accord_core::profile::ClientProfile;
//! use chrono::Utc;
//!
//! let profile = ClientProfile {
//!   client_id:    "client_1".into(),
//!   name:         "Alice Hartwell".into(),
//!   age_group:    "25-35".into(),
//!   city:         "Northbridge".into(),
//!   balance:      150_000.0,
//!   transactions: vec![],
//! };
//! let datasets =
//!   aggregate_profile(&profile, "Retail Analytics Pro", Utc::now());
//! assert_eq!(datasets.len(), 3);
//! ```

mod bill;
mod category;
mod demographic;

use accord_core::{
  dataset::{AggregatedDataset, DatasetMetrics},
  profile::ClientProfile,
};
use chrono::{DateTime, Utc};

pub use crate::{
  bill::average_bill, category::category_spending,
  demographic::demographic_summary,
};

/// Clients contributing to each dataset. Single-client aggregation for now;
/// cohort merging would replace this with a real count.
const SAMPLE_SIZE: u32 = 1;

// ─── Public API ──────────────────────────────────────────────────────────────

/// Compute the three datasets a consent authorizes for `profile`, attributed
/// to `company` and stamped `generated_at`.
///
/// Always returns exactly three records (category spend, average bill,
/// demographics), whatever the history holds. The records carry no client
/// identity; attribution is the caller's concern.
pub fn aggregate_profile(
  profile: &ClientProfile,
  company: &str,
  generated_at: DateTime<Utc>,
) -> Vec<AggregatedDataset> {
  [
    DatasetMetrics::CategorySpending(category_spending(&profile.transactions)),
    DatasetMetrics::AverageBill(average_bill(&profile.transactions)),
    DatasetMetrics::Demographics(demographic_summary(profile)),
  ]
  .into_iter()
  .map(|metrics| AggregatedDataset {
    company: company.to_owned(),
    data_type: metrics.data_type(),
    metrics,
    sample_size: SAMPLE_SIZE,
    generated_at,
  })
  .collect()
}

#[cfg(test)]
mod tests;
