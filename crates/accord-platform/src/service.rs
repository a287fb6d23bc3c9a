//! Platform operations — validation, the consent-to-aggregate pipeline, and
//! the partner read path.

use std::sync::Arc;

use accord_aggregate::aggregate_profile;
use accord_core::{
  Error as CoreError,
  consent::{ConsentGrant, ConsentKey, DataType, NewConsent},
  dataset::AggregatedDataset,
  profile::{ClientProfile, ProfileDirectory},
  store::ConsentStore,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{PlatformConfig, Result, demo};

// ─── Request / response shapes ───────────────────────────────────────────────

/// Inbound consent upsert, as the surrounding system deserializes it.
/// Labels stay strings here; they are validated against [`DataType`] before
/// anything is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentRequest {
  pub client_id:  String,
  pub company:    String,
  pub data_types: Vec<String>,
  pub is_active:  bool,
}

/// The partner-facing read-path response: every stored dataset for one
/// company, across all contributing clients and kinds.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDatasets {
  pub company:        String,
  pub total_datasets: usize,
  pub datasets:       Vec<AggregatedDataset>,
  /// Set only when nothing is stored yet; an empty result is not an error.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub note:           Option<String>,
}

impl CompanyDatasets {
  fn new(company: String, datasets: Vec<AggregatedDataset>) -> Self {
    let note = datasets
      .is_empty()
      .then(|| "no datasets available for this company yet".to_owned());
    Self {
      total_datasets: datasets.len(),
      company,
      datasets,
      note,
    }
  }
}

// ─── Platform ────────────────────────────────────────────────────────────────

/// The consent platform: a profile directory, a partner list, and a consent
/// store, glued together by the validation and aggregation rules.
///
/// Cloning is cheap; clones share the same store and reference data.
#[derive(Clone)]
pub struct Platform<S> {
  store:    Arc<S>,
  profiles: Arc<ProfileDirectory>,
  config:   Arc<PlatformConfig>,
}

impl<S: ConsentStore> Platform<S> {
  pub fn new(
    config: PlatformConfig,
    profiles: ProfileDirectory,
    store: S,
  ) -> Self {
    Self {
      store:    Arc::new(store),
      profiles: Arc::new(profiles),
      config:   Arc::new(config),
    }
  }

  // ── Consent writes ────────────────────────────────────────────────────

  /// Create or replace the consent identified by the request's
  /// (client, company) pair.
  ///
  /// Validation runs before any state changes, so an unknown client or
  /// label leaves both tables untouched. An active request has its three
  /// datasets generated on the spot; an inactive one is stored with no
  /// datasets, clearing any previously generated for the pair.
  pub async fn upsert_consent(
    &self,
    request: ConsentRequest,
  ) -> Result<ConsentGrant> {
    let profile = self
      .profiles
      .get(&request.client_id)
      .ok_or_else(|| CoreError::ClientNotFound(request.client_id.clone()))?;
    let data_types = DataType::parse_labels(&request.data_types)?;

    let datasets = if request.is_active {
      aggregate_profile(profile, &request.company, Utc::now())
    } else {
      Vec::new()
    };
    let dataset_count = datasets.len();

    let input = NewConsent {
      client_id: request.client_id,
      company: request.company,
      data_types,
      is_active: request.is_active,
    };
    let grant = self.store.upsert_consent(input, datasets).await?;

    tracing::info!(
      "stored consent {} -> {} (active: {}, {} datasets)",
      grant.client_id,
      grant.company,
      grant.is_active,
      dataset_count,
    );
    Ok(grant)
  }

  /// Fully revoke the grant under `key`, deleting its datasets with it.
  ///
  /// Unlike an inactive upsert, revocation leaves no record behind.
  pub async fn revoke_consent(&self, key: &ConsentKey) -> Result<ConsentGrant> {
    let grant = self.store.remove_consent(key).await?;
    tracing::info!("revoked consent {} -> {}", key.client_id, key.company);
    Ok(grant)
  }

  // ── Consent reads ─────────────────────────────────────────────────────

  /// All grants for one client. An empty list is not an error; ids the
  /// directory does not know simply list nothing.
  pub async fn consents_for_client(
    &self,
    client_id: &str,
  ) -> Result<Vec<ConsentGrant>> {
    Ok(self.store.consents_for_client(client_id).await?)
  }

  // ── Partner read path ─────────────────────────────────────────────────

  /// Every dataset stored for `company`, gated on the partner list.
  ///
  /// Fails with [`accord_core::Error::UnknownPartner`] for a company
  /// outside the configured list. A registered partner with nothing stored
  /// gets an empty response carrying a note, never an error.
  pub async fn company_datasets(
    &self,
    company: &str,
  ) -> Result<CompanyDatasets> {
    if !self.config.is_partner(company) {
      return Err(CoreError::UnknownPartner(company.to_owned()).into());
    }
    let datasets = self.store.datasets_for_company(company).await?;
    tracing::debug!("serving {} datasets to {}", datasets.len(), company);
    Ok(CompanyDatasets::new(company.to_owned(), datasets))
  }

  // ── Reference data ────────────────────────────────────────────────────

  /// Look up one client profile.
  pub fn client_profile(&self, client_id: &str) -> Result<&ClientProfile> {
    self
      .profiles
      .get(client_id)
      .ok_or_else(|| CoreError::ClientNotFound(client_id.to_owned()).into())
  }

  /// Every known client id, in order.
  pub fn client_ids(&self) -> Vec<&str> {
    self.profiles.client_ids().collect()
  }

  /// The companies eligible to read aggregates.
  pub fn partners(&self) -> &[String] {
    &self.config.partners
  }

  /// Every permitted data-type label.
  pub fn data_types(&self) -> &'static [DataType] {
    DataType::all()
  }

  // ── Demo seeding ──────────────────────────────────────────────────────

  /// Replay the canned demo consents through the normal upsert path,
  /// returning how many grants were stored. The profile directory must
  /// contain the demo clients (see [`demo::demo_directory`]).
  pub async fn seed_demo(&self) -> Result<usize> {
    let requests = demo::demo_consents();
    let count = requests.len();
    for request in requests {
      self.upsert_consent(request).await?;
    }
    tracing::info!("seeded {count} demo consents");
    Ok(count)
  }
}
