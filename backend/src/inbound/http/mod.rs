//! HTTP inbound adapter exposing the REST endpoints.

pub mod actor;
pub mod auth;
pub mod error;
pub mod health;
pub mod menu;
pub mod reviews;
pub mod stalls;
pub mod state;
pub mod validation;

pub use error::{ApiError, ApiResult};
