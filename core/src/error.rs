// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Fallback shown when the upstream rejects a login without a `detail` field.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback shown when a registration is rejected without a readable reason.
pub const REGISTRATION_FAILED: &str = "Registration failed";
/// Shown whenever no response could be obtained at all.
pub const TRANSPORT_FAILED: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum CanteenError {
  /// Rejected locally, nothing was sent.
  #[error("{0}")]
  Validation(String),

  /// No access token in the session store.
  #[error("Not logged in")]
  Unauthenticated,

  /// The upstream answered with a non-2xx status.
  #[error("{detail}")]
  Http { status: u16, detail: String },

  /// The upstream could not be reached.
  #[error("Something went wrong")]
  Transport {
    #[source]
    source: reqwest::Error,
  },

  #[error("Unexpected response from {context}")]
  Decode {
    context: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("A checkout is already in progress")]
  CheckoutInProgress,

  #[error("Session storage failed: {source}")]
  SessionStorage {
    #[source]
    source: AnyhowError,
  },
}

impl CanteenError {
  pub fn validation(message: impl Into<String>) -> Self {
    CanteenError::Validation(message.into())
  }

  /// The message a student sees for this failure.
  pub fn user_message(&self) -> String {
    self.to_string()
  }

  /// HTTP status reported by the upstream, if the failure came from one.
  pub fn upstream_status(&self) -> Option<u16> {
    match self {
      CanteenError::Http { status, .. } => Some(*status),
      _ => None,
    }
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, CanteenError::Validation(_))
  }
}

impl From<AnyhowError> for CanteenError {
  fn from(err: AnyhowError) -> Self {
    CanteenError::SessionStorage { source: err }
  }
}

pub type CanteenResult<T, E = CanteenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn http_error_displays_detail_verbatim() {
    let err = CanteenError::Http {
      status: 400,
      detail: "Invalid credentials".to_string(),
    };
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(err.upstream_status(), Some(400));
  }

  #[test]
  fn storage_errors_convert_from_anyhow() {
    let err: CanteenError = anyhow::anyhow!("disk full").into();
    assert!(matches!(err, CanteenError::SessionStorage { .. }));
    assert_eq!(err.user_message(), "Session storage failed: disk full");
  }
}
