//! Online-storefront demo: a product catalog, session-scoped carts, and a
//! mock checkout flow that produces an ephemeral receipt.
//!
//! The library exposes the stores, services, and web layer so that both the
//! server binary and the integration tests can assemble the same application.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;
