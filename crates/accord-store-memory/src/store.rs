//! [`MemoryStore`] — the in-memory implementation of [`ConsentStore`].

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;

use accord_core::{
  Error, Result,
  consent::{ConsentGrant, ConsentKey, NewConsent},
  dataset::{AggregatedDataset, DatasetKey},
  store::ConsentStore,
};

// ─── Tables ──────────────────────────────────────────────────────────────────

/// The two mappings the store owns, guarded as one unit. Every write that
/// touches both does so under a single lock acquisition.
#[derive(Default)]
struct Tables {
  consents: BTreeMap<ConsentKey, ConsentGrant>,
  datasets: BTreeMap<DatasetKey, AggregatedDataset>,
}

impl Tables {
  /// Drop every dataset attributed to `key`, whatever its kind.
  fn clear_datasets_for(&mut self, key: &ConsentKey) {
    self
      .datasets
      .retain(|k, _| k.client_id != key.client_id || k.company != key.company);
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Accord consent store held entirely in process memory.
///
/// Cloning is cheap — the tables are reference-counted, and clones observe
/// the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
  tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
  /// An empty store.
  pub fn new() -> Self {
    Self::default()
  }
}

// ─── ConsentStore impl ───────────────────────────────────────────────────────

impl ConsentStore for MemoryStore {
  async fn upsert_consent(
    &self,
    input: NewConsent,
    datasets: Vec<AggregatedDataset>,
  ) -> Result<ConsentGrant> {
    let grant = ConsentGrant {
      client_id:    input.client_id,
      company:      input.company,
      data_types:   input.data_types,
      is_active:    input.is_active,
      last_updated: Utc::now(),
    };
    let key = grant.key();

    let mut tables = self.tables.write().await;
    tables.clear_datasets_for(&key);
    for dataset in datasets {
      let dataset_key = DatasetKey::new(
        key.client_id.clone(),
        key.company.clone(),
        dataset.data_type,
      );
      tables.datasets.insert(dataset_key, dataset);
    }
    tables.consents.insert(key, grant.clone());

    Ok(grant)
  }

  async fn remove_consent(&self, key: &ConsentKey) -> Result<ConsentGrant> {
    let mut tables = self.tables.write().await;
    let grant =
      tables
        .consents
        .remove(key)
        .ok_or_else(|| Error::ConsentNotFound {
          client:  key.client_id.clone(),
          company: key.company.clone(),
        })?;
    tables.clear_datasets_for(key);
    Ok(grant)
  }

  async fn consent(&self, key: &ConsentKey) -> Result<Option<ConsentGrant>> {
    Ok(self.tables.read().await.consents.get(key).cloned())
  }

  async fn consents_for_client(
    &self,
    client_id: &str,
  ) -> Result<Vec<ConsentGrant>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .consents
        .values()
        .filter(|grant| grant.client_id == client_id)
        .cloned()
        .collect(),
    )
  }

  async fn datasets_for_company(
    &self,
    company: &str,
  ) -> Result<Vec<AggregatedDataset>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .datasets
        .iter()
        .filter(|(key, _)| key.company == company)
        .map(|(_, dataset)| dataset.clone())
        .collect(),
    )
  }

  async fn all_consents(&self) -> Result<Vec<ConsentGrant>> {
    let tables = self.tables.read().await;
    Ok(tables.consents.values().cloned().collect())
  }

  async fn all_datasets(
    &self,
  ) -> Result<Vec<(DatasetKey, AggregatedDataset)>> {
    let tables = self.tables.read().await;
    Ok(
      tables
        .datasets
        .iter()
        .map(|(key, dataset)| (key.clone(), dataset.clone()))
        .collect(),
    )
  }
}
