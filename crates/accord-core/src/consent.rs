//! Consent grants — a client's authorization for a partner company to
//! receive categories of aggregated data.
//!
//! A grant is keyed by its (client, company) pair. Granting again for the
//! same pair replaces the previous grant wholesale; the data-type set is
//! replaced, never merged.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::{Error, Result};

// ─── DataType ────────────────────────────────────────────────────────────────

/// The closed set of data categories a consent may cover. The snake_case
/// serialized form doubles as the wire label inbound requests use.
///
/// `SpendingFrequency` and `Geography` are accepted on grants but no
/// generator for them exists yet, so they never produce a dataset.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataType {
  CategorySpending,
  AverageBill,
  SpendingFrequency,
  Geography,
  AgeGroupStats,
}

impl DataType {
  /// Every permitted label, in declaration order.
  pub fn all() -> &'static [DataType] {
    <Self as VariantArray>::VARIANTS
  }

  /// Parse inbound wire labels into a normalised set.
  ///
  /// Any label outside the fixed set rejects the whole batch; duplicates
  /// collapse silently.
  pub fn parse_labels<I, S>(labels: I) -> Result<BTreeSet<DataType>>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    labels
      .into_iter()
      .map(|label| {
        label
          .as_ref()
          .parse::<DataType>()
          .map_err(|_| Error::UnknownDataType(label.as_ref().to_owned()))
      })
      .collect()
  }
}

// ─── ConsentKey ──────────────────────────────────────────────────────────────

/// The composite key identifying one grant. Kept structured rather than
/// delimiter-joined, so ids containing any separator cannot collide.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ConsentKey {
  pub client_id: String,
  pub company:   String,
}

impl ConsentKey {
  pub fn new(client_id: impl Into<String>, company: impl Into<String>) -> Self {
    Self {
      client_id: client_id.into(),
      company:   company.into(),
    }
  }
}

// ─── ConsentGrant ────────────────────────────────────────────────────────────

/// A stored consent grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentGrant {
  pub client_id:    String,
  pub company:      String,
  pub data_types:   BTreeSet<DataType>,
  /// An inactive grant is kept on record but holds no datasets.
  pub is_active:    bool,
  /// Store-assigned timestamp of the most recent upsert; never accepted
  /// from callers.
  pub last_updated: DateTime<Utc>,
}

impl ConsentGrant {
  pub fn key(&self) -> ConsentKey {
    ConsentKey::new(&self.client_id, &self.company)
  }
}

// ─── NewConsent ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::ConsentStore::upsert_consent`]. `last_updated`
/// is stamped by the store on write.
#[derive(Debug, Clone)]
pub struct NewConsent {
  pub client_id:  String,
  pub company:    String,
  pub data_types: BTreeSet<DataType>,
  pub is_active:  bool,
}

impl NewConsent {
  pub fn key(&self) -> ConsentKey {
    ConsentKey::new(&self.client_id, &self.company)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ErrorKind;

  #[test]
  fn labels_round_trip_through_display_and_parse() {
    for &data_type in DataType::all() {
      let label = data_type.to_string();
      assert_eq!(label.parse::<DataType>(), Ok(data_type));
    }
    assert_eq!(DataType::CategorySpending.to_string(), "category_spending");
    assert_eq!(DataType::AgeGroupStats.to_string(), "age_group_stats");
  }

  #[test]
  fn all_lists_the_five_known_labels() {
    assert_eq!(DataType::all().len(), 5);
  }

  #[test]
  fn parse_labels_normalises_and_dedupes() {
    let parsed = DataType::parse_labels([
      "average_bill",
      "category_spending",
      "average_bill",
    ])
    .unwrap();

    assert_eq!(
      parsed.into_iter().collect::<Vec<_>>(),
      vec![DataType::CategorySpending, DataType::AverageBill]
    );
  }

  #[test]
  fn parse_labels_rejects_the_whole_batch_on_one_bad_label() {
    let err =
      DataType::parse_labels(["category_spending", "horoscope"]).unwrap_err();

    assert!(
      matches!(&err, Error::UnknownDataType(label) if label == "horoscope")
    );
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
  }

  #[test]
  fn serde_form_matches_the_wire_label() {
    let json = serde_json::to_string(&DataType::AverageBill).unwrap();
    assert_eq!(json, "\"average_bill\"");
    let back: DataType = serde_json::from_str("\"geography\"").unwrap();
    assert_eq!(back, DataType::Geography);
  }

  #[test]
  fn grant_key_reflects_the_pair() {
    let grant = ConsentGrant {
      client_id:    "client_1".into(),
      company:      "Retail Analytics Pro".into(),
      data_types:   BTreeSet::new(),
      is_active:    true,
      last_updated: Utc::now(),
    };
    assert_eq!(
      grant.key(),
      ConsentKey::new("client_1", "Retail Analytics Pro")
    );
  }
}
