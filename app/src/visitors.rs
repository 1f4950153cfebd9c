// app/src/visitors.rs

//! One client session and dashboard per browser.

use canteen::{ApiConnector, CanteenApi, CanteenResult, Dashboard, FilePersistence, SessionStore};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Cookie carrying the visitor id.
pub const VISITOR_COOKIE: &str = "canteen_visitor";

pub struct Visitor {
  pub id: Uuid,
  pub dashboard: Dashboard,
}

impl Visitor {
  pub fn session(&self) -> &Arc<SessionStore> {
    self.dashboard.session()
  }
}

pub struct VisitorRegistry {
  connector: Arc<dyn ApiConnector>,
  session_dir: Option<PathBuf>,
  visitors: Mutex<HashMap<Uuid, Arc<Visitor>>>,
}

impl VisitorRegistry {
  pub fn new(connector: Arc<dyn ApiConnector>, session_dir: Option<PathBuf>) -> Self {
    Self {
      connector,
      session_dir,
      visitors: Mutex::new(HashMap::new()),
    }
  }

  pub fn get(&self, id: Uuid) -> Option<Arc<Visitor>> {
    self.visitors.lock().get(&id).cloned()
  }

  /// Builds state for `id` without registering it.
  ///
  /// With a session directory an earlier login is restored from disk, so a
  /// restarted server still recognises the browser.
  #[instrument(name = "VisitorRegistry::open", skip(self), err(Display))]
  pub async fn open(&self, id: Uuid) -> CanteenResult<Arc<Visitor>> {
    let session = match &self.session_dir {
      Some(dir) => {
        let persistence = FilePersistence::new(dir.join(format!("{id}.json")));
        Arc::new(SessionStore::open(Arc::new(persistence)).await?)
      }
      None => Arc::new(SessionStore::in_memory()),
    };
    let api = self.connector.connect(Arc::clone(&session));
    Ok(Arc::new(Visitor {
      id,
      dashboard: Dashboard::new(api, session),
    }))
  }

  /// Registers a visitor that has just signed in, replacing any earlier
  /// state kept for the same id.
  pub fn admit(&self, visitor: Arc<Visitor>) {
    debug!(visitor = %visitor.id, "Visitor admitted.");
    self.visitors.lock().insert(visitor.id, visitor);
  }

  /// The signed-in visitor behind `id`, if any.
  ///
  /// Unknown ids are only looked up on disk; nothing is registered for an
  /// id without a stored session.
  pub async fn find(&self, id: Uuid) -> CanteenResult<Option<Arc<Visitor>>> {
    if let Some(existing) = self.get(id) {
      return Ok(Some(existing));
    }
    if self.session_dir.is_none() {
      return Ok(None);
    }
    let restored = self.open(id).await?;
    if !restored.session().is_authenticated() {
      return Ok(None);
    }
    // Another request may have restored the same visitor meanwhile.
    let visitor = Arc::clone(self.visitors.lock().entry(id).or_insert(restored));
    debug!(visitor = %visitor.id, "Visitor restored from disk.");
    Ok(Some(visitor))
  }

  /// An API handle that is never authenticated, for registration.
  pub fn anonymous_api(&self) -> Arc<dyn CanteenApi> {
    self.connector.connect(Arc::new(SessionStore::in_memory()))
  }

  pub fn forget(&self, id: Uuid) {
    if self.visitors.lock().remove(&id).is_some() {
      info!(visitor = %id, "Visitor state dropped.");
    }
  }

  pub fn len(&self) -> usize {
    self.visitors.lock().len()
  }
}
