// core/src/session/persistence.rs

use super::store::Session;
use anyhow::Context;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Where a session survives between page loads.
#[async_trait]
pub trait SessionPersistence: Send + Sync {
  async fn load(&self) -> anyhow::Result<Option<Session>>;
  async fn save(&self, session: &Session) -> anyhow::Result<()>;
  async fn clear(&self) -> anyhow::Result<()>;
}

/// Keeps the session for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
  slot: Mutex<Option<Session>>,
}

impl MemoryPersistence {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_session(session: Session) -> Self {
    Self {
      slot: Mutex::new(Some(session)),
    }
  }
}

#[async_trait]
impl SessionPersistence for MemoryPersistence {
  async fn load(&self) -> anyhow::Result<Option<Session>> {
    Ok(self.slot.lock().clone())
  }

  async fn save(&self, session: &Session) -> anyhow::Result<()> {
    *self.slot.lock() = Some(session.clone());
    Ok(())
  }

  async fn clear(&self) -> anyhow::Result<()> {
    self.slot.lock().take();
    Ok(())
  }
}

/// Stores the session as one JSON document on disk.
///
/// A missing file means "no session"; clearing a missing file is not an error.
#[derive(Debug, Clone)]
pub struct FilePersistence {
  path: PathBuf,
}

impl FilePersistence {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

#[async_trait]
impl SessionPersistence for FilePersistence {
  async fn load(&self) -> anyhow::Result<Option<Session>> {
    let raw = match fs::read(&self.path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e).with_context(|| format!("reading session file {}", self.path.display())),
    };
    let session = serde_json::from_slice(&raw)
      .with_context(|| format!("decoding session file {}", self.path.display()))?;
    debug!(path = %self.path.display(), "Loaded persisted session.");
    Ok(Some(session))
  }

  async fn save(&self, session: &Session) -> anyhow::Result<()> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
          .await
          .with_context(|| format!("creating session directory {}", parent.display()))?;
      }
    }
    let raw = serde_json::to_vec_pretty(session).context("encoding session")?;
    fs::write(&self.path, raw)
      .await
      .with_context(|| format!("writing session file {}", self.path.display()))?;
    Ok(())
  }

  async fn clear(&self) -> anyhow::Result<()> {
    match fs::remove_file(&self.path).await {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e).with_context(|| format!("removing session file {}", self.path.display())),
    }
  }
}
