//! Error types for `accord-core`.

use thiserror::Error;

/// Coarse classification the consuming boundary maps errors onto.
///
/// Every failure here is synchronous and non-retryable: it reports a caller
/// mistake, never a transient condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// An identifier referenced something that does not exist.
  NotFound,
  /// An inbound value fell outside a fixed enumeration.
  InvalidArgument,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("client not found: {0}")]
  ClientNotFound(String),

  #[error("no consent recorded for client {client} and company {company}")]
  ConsentNotFound { client: String, company: String },

  #[error("unknown data type label: {0:?}")]
  UnknownDataType(String),

  #[error("company {0:?} is not a registered partner")]
  UnknownPartner(String),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::ClientNotFound(_) | Self::ConsentNotFound { .. } => {
        ErrorKind::NotFound
      }
      Self::UnknownDataType(_) | Self::UnknownPartner(_) => {
        ErrorKind::InvalidArgument
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
