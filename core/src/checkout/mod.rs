// core/src/checkout/mod.rs

//! Submitting a cart as one order request per line.

pub mod gate;
pub mod orchestrator;
pub mod report;

pub use gate::{CheckoutGate, CheckoutPermit};
pub use orchestrator::{place_order, EMPTY_CART_MESSAGE};
pub use report::{CheckoutReport, LineOutcome, LineReport};
