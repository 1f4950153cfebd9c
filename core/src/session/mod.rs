// core/src/session/mod.rs

//! The authenticated identity attached to outgoing requests.
//!
//! A [`SessionStore`] is created explicitly with [`SessionStore::open`] and
//! handed to whatever needs it (the API client, the dashboard). There is no
//! ambient global session.

pub mod persistence;
pub mod store;

pub use persistence::{FilePersistence, MemoryPersistence, SessionPersistence};
pub use store::{AuthTokens, Session, SessionStore};
