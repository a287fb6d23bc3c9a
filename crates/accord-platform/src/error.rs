//! Error types for `accord-platform`.

use accord_core::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Domain failure surfaced from validation or the consent store.
  #[error(transparent)]
  Domain(#[from] accord_core::Error),

  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),
}

impl Error {
  /// Map onto the coarse taxonomy the consuming boundary reports. A broken
  /// configuration counts as an invalid argument from the caller.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Domain(e) => e.kind(),
      Self::Config(_) => ErrorKind::InvalidArgument,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
