//! Client profiles — the reference data aggregates are computed from.
//!
//! Profiles are fixed at platform construction and never mutated. Consent
//! state changes constantly; the transaction histories underneath it do not,
//! so the directory is a plain read-only map rather than a store table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Transaction ─────────────────────────────────────────────────────────────

/// A single spending event, owned exclusively by one client's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
  pub id:       String,
  /// Conventionally positive; a spend, not a signed ledger entry.
  pub amount:   f64,
  /// Free-form grouping label, e.g. "Groceries".
  pub category: String,
  /// Calendar date only; transactions carry no time component.
  pub date:     NaiveDate,
  pub merchant: String,
}

// ─── ClientProfile ───────────────────────────────────────────────────────────

/// A bank client: display attributes plus their transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
  pub client_id:    String,
  pub name:         String,
  /// Bracket label such as "25-35"; passed through to demographics verbatim.
  pub age_group:    String,
  pub city:         String,
  pub balance:      f64,
  pub transactions: Vec<Transaction>,
}

impl ClientProfile {
  /// Sum of every transaction amount in the history.
  pub fn total_spent(&self) -> f64 {
    self.transactions.iter().map(|t| t.amount).sum()
  }
}

// ─── ProfileDirectory ────────────────────────────────────────────────────────

/// The fixed set of client profiles the platform serves, keyed by client id.
///
/// Lookups against ids not present simply miss; the directory itself never
/// fails.
#[derive(Debug, Clone, Default)]
pub struct ProfileDirectory {
  profiles: BTreeMap<String, ClientProfile>,
}

impl ProfileDirectory {
  pub fn new(profiles: impl IntoIterator<Item = ClientProfile>) -> Self {
    Self {
      profiles: profiles
        .into_iter()
        .map(|p| (p.client_id.clone(), p))
        .collect(),
    }
  }

  pub fn get(&self, client_id: &str) -> Option<&ClientProfile> {
    self.profiles.get(client_id)
  }

  pub fn contains(&self, client_id: &str) -> bool {
    self.profiles.contains_key(client_id)
  }

  /// Every known client id, in lexicographic order.
  pub fn client_ids(&self) -> impl Iterator<Item = &str> {
    self.profiles.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.profiles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.profiles.is_empty()
  }
}
