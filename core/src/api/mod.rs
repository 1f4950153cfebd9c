// core/src/api/mod.rs

//! Gateway to the upstream canteen REST API.
//!
//! [`CanteenApi`] is the seam the rest of the crate talks to; [`ApiClient`]
//! is the reqwest-backed implementation. Every authenticated call reads the
//! bearer token from the injected [`SessionStore`](crate::session::SessionStore)
//! and is refused locally when there is none.

pub mod client;
pub mod config;
pub mod detail;
pub mod wire;

pub use client::{ApiClient, ApiConnector, Auth, CanteenApi, HttpConnector};
pub use config::ApiConfig;
pub use wire::{LoginRequest, LoginResponse, PlaceOrderRequest, RegistrationRequest};
