//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain's driving ports and stay testable with mock substitutes.

use std::sync::Arc;

use crate::domain::ports::{IdentityStore, MenuCatalog, ReviewLedger, StallDirectory};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration, login, and actor resolution.
    pub identity: Arc<dyn IdentityStore>,
    /// Stall listing and management.
    pub stalls: Arc<dyn StallDirectory>,
    /// Per-stall menu management.
    pub menu: Arc<dyn MenuCatalog>,
    /// Per-stall reviews.
    pub reviews: Arc<dyn ReviewLedger>,
}
