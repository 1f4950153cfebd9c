// core/src/dashboard/mod.rs

//! The student dashboard: menu, order history, dues and the cart, composed
//! into one render state.

pub mod snapshot;
pub mod view_model;

pub use snapshot::{CartLineView, DashboardSnapshot, MenuEntry, OrderView};
pub use view_model::{ActiveTab, Dashboard, DashboardData, LoadState, SectionedLoad};
