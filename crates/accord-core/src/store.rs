//! The `ConsentStore` trait — the two-table contract storage backends
//! implement.
//!
//! Grants and the datasets derived from them live behind one abstraction so
//! a backend can change both in a single step. A reader must never observe a
//! grant without its datasets, nor datasets that outlived a revoke.

use std::future::Future;

use crate::{
  Result,
  consent::{ConsentGrant, ConsentKey, NewConsent},
  dataset::{AggregatedDataset, DatasetKey},
};

/// Abstraction over a consent store backend.
///
/// Callers validate inputs before reaching the store; the store never sees
/// an unknown client or a malformed data-type label. All methods return
/// `Send` futures so the trait composes with multi-threaded runtimes.
pub trait ConsentStore: Send + Sync {
  /// Store `input` under its (client, company) key, stamping `last_updated`,
  /// and replace every dataset previously held for that pair with
  /// `datasets`; an empty vec clears the pair. Replaces any existing grant
  /// wholesale.
  ///
  /// The grant and its datasets become visible together or not at all.
  fn upsert_consent(
    &self,
    input: NewConsent,
    datasets: Vec<AggregatedDataset>,
  ) -> impl Future<Output = Result<ConsentGrant>> + Send + '_;

  /// Delete the grant under `key` along with every dataset attributed to
  /// it, returning the removed grant.
  ///
  /// Fails with [`Error::ConsentNotFound`](crate::Error::ConsentNotFound)
  /// when no grant exists; a failed removal deletes nothing.
  fn remove_consent<'a>(
    &'a self,
    key: &'a ConsentKey,
  ) -> impl Future<Output = Result<ConsentGrant>> + Send + 'a;

  /// Point lookup. `None` when no grant exists under `key`.
  fn consent<'a>(
    &'a self,
    key: &'a ConsentKey,
  ) -> impl Future<Output = Result<Option<ConsentGrant>>> + Send + 'a;

  /// All grants for one client, in key order. An empty list is not an
  /// error; unknown ids simply yield nothing.
  fn consents_for_client<'a>(
    &'a self,
    client_id: &'a str,
  ) -> impl Future<Output = Result<Vec<ConsentGrant>>> + Send + 'a;

  /// Every stored dataset for `company`, across all contributing clients
  /// and kinds, in key order.
  fn datasets_for_company<'a>(
    &'a self,
    company: &'a str,
  ) -> impl Future<Output = Result<Vec<AggregatedDataset>>> + Send + 'a;

  /// Snapshot of every grant, in key order.
  fn all_consents(
    &self,
  ) -> impl Future<Output = Result<Vec<ConsentGrant>>> + Send + '_;

  /// Snapshot of every dataset with its attribution key.
  fn all_datasets(
    &self,
  ) -> impl Future<Output = Result<Vec<(DatasetKey, AggregatedDataset)>>>
  + Send
  + '_;
}
