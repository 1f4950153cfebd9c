// core/src/lib.rs

//! Canteen: the client core behind the campus canteen student dashboard.
//!
//! The upstream REST API owns pricing, dues and order persistence. This crate
//! owns what happens on the client side of it:
//!  - A [`SessionStore`] holding the bearer token, injected wherever it is needed.
//!  - An API gateway ([`CanteenApi`], [`ApiClient`]) that refuses authenticated
//!    calls locally when no token is present.
//!  - The [`Cart`]: food id → snapshot line with a quantity of at least 1.
//!  - Sequential checkout ([`place_order`]) with a per-line [`CheckoutReport`].
//!  - The [`Dashboard`] view-model composing menu, orders, dues and cart.
//!
//! Typical flow:
//! 1. `SessionStore::open(persistence)` and an `ApiClient` over it.
//! 2. `auth::sign_in(&api, &session, username, password)`.
//! 3. `Dashboard::new(api, session)`, then `load_all()`.
//! 4. `toggle`/`set_quantity` on the dashboard, then `checkout()`.

pub mod api;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
pub mod shared;

pub use crate::api::{ApiClient, ApiConfig, ApiConnector, Auth, CanteenApi, HttpConnector, LoginResponse, RegistrationRequest};
pub use crate::cart::{Cart, CartLine};
pub use crate::checkout::{place_order, CheckoutGate, CheckoutReport, LineOutcome, LineReport};
pub use crate::dashboard::{ActiveTab, Dashboard, DashboardData, DashboardSnapshot, LoadState, SectionedLoad};
pub use crate::error::{CanteenError, CanteenResult};
pub use crate::models::{DuesSummary, FoodId, FoodItem, Order, OrderId, UserProfile};
pub use crate::session::{AuthTokens, FilePersistence, MemoryPersistence, Session, SessionPersistence, SessionStore};
pub use crate::shared::Shared;
