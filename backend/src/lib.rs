//! Stallside backend library.
//!
//! A food-stall marketplace API: accounts and bearer-token authentication,
//! geolocated stall listings, per-stall menus, and per-stall reviews, built
//! as a hexagonal core (`domain`) with HTTP inbound and storage/crypto
//! outbound adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
