// core/src/session/store.rs

use super::persistence::{MemoryPersistence, SessionPersistence};
use crate::error::CanteenResult;
use crate::models::UserProfile;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
  pub access: String,
  #[serde(default)]
  pub refresh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
  pub tokens: AuthTokens,
  #[serde(default)]
  pub user: Option<UserProfile>,
}

/// Holds the access token and cached profile of one browsing session.
///
/// Reads never block on persistence; writes update memory first and then the
/// backend. No expiry or refresh handling happens here: an expired token is
/// reported by the upstream like any other rejected request.
pub struct SessionStore {
  current: RwLock<Option<Session>>,
  persistence: Arc<dyn SessionPersistence>,
}

impl std::fmt::Debug for SessionStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SessionStore")
      .field("authenticated", &self.is_authenticated())
      .finish()
  }
}

impl SessionStore {
  /// Opens a store over `persistence`, restoring any session saved there.
  #[instrument(name = "SessionStore::open", skip_all, err(Display))]
  pub async fn open(persistence: Arc<dyn SessionPersistence>) -> CanteenResult<Self> {
    let restored = persistence.load().await?;
    if restored.is_some() {
      info!("Restored persisted session.");
    }
    Ok(Self {
      current: RwLock::new(restored),
      persistence,
    })
  }

  /// A store with no persisted state, backed by process memory.
  pub fn in_memory() -> Self {
    Self {
      current: RwLock::new(None),
      persistence: Arc::new(MemoryPersistence::new()),
    }
  }

  #[instrument(name = "SessionStore::set_session", skip_all, err(Display))]
  pub async fn set_session(&self, tokens: AuthTokens, user: Option<UserProfile>) -> CanteenResult<()> {
    let session = Session { tokens, user };
    *self.current.write() = Some(session.clone());
    self.persistence.save(&session).await?;
    debug!("Session stored.");
    Ok(())
  }

  pub fn access_token(&self) -> Option<String> {
    self.current.read().as_ref().map(|s| s.tokens.access.clone())
  }

  pub fn refresh_token(&self) -> Option<String> {
    self.current.read().as_ref().and_then(|s| s.tokens.refresh.clone())
  }

  pub fn user(&self) -> Option<UserProfile> {
    self.current.read().as_ref().and_then(|s| s.user.clone())
  }

  pub fn is_authenticated(&self) -> bool {
    self.current.read().is_some()
  }

  /// Drops all session state. Callers observe the logout as soon as this
  /// starts; the persisted copy is removed afterwards.
  #[instrument(name = "SessionStore::clear_session", skip_all, err(Display))]
  pub async fn clear_session(&self) -> CanteenResult<()> {
    self.current.write().take();
    self.persistence.clear().await?;
    info!("Session cleared.");
    Ok(())
  }
}
