//! Consent-platform service layer for Accord.
//!
//! Wires the client profile directory, the configured partner list, and a
//! [`accord_core::store::ConsentStore`] backend into the operations the
//! surrounding system calls: consent upsert and revocation, per-client
//! listings, and the partner-facing aggregate read path. Transport,
//! dashboards, and process startup are the caller's responsibility.

pub mod config;
pub mod demo;
pub mod error;
pub mod service;

pub use config::PlatformConfig;
pub use error::{Error, Result};
pub use service::{CompanyDatasets, ConsentRequest, Platform};
