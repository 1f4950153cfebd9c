// core/src/models/mod.rs

//! Data shapes exchanged with the upstream canteen API.
//!
//! Everything here is owned and computed by the upstream; the client only
//! displays it. Decimal fields accept both JSON strings (`"120.00"`) and
//! numbers.

pub mod dues;
pub mod food;
pub mod order;
pub mod user;

pub use dues::DuesSummary;
pub use food::{FoodId, FoodItem};
pub use order::{Order, OrderId};
pub use user::UserProfile;
