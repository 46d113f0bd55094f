//! Domain layer: typed entities, pure authorization rules, use-case
//! services, and the ports they speak through.
//!
//! Nothing in this module knows about HTTP, JSON bodies, or any concrete
//! storage technology; inbound and outbound adapters translate at the
//! boundary.

pub mod access;
pub mod error;
pub mod geo;
pub mod identity_service;
pub mod menu;
pub mod menu_service;
pub mod ports;
pub mod review;
pub mod review_service;
pub mod stall;
pub mod stall_service;
pub mod user;

pub use self::error::{DomainError, ErrorCode};
pub use self::identity_service::{IdentityService, TOKEN_TTL_DAYS};
pub use self::menu::{MenuItem, MenuItemId, MenuItemPatch};
pub use self::menu_service::MenuService;
pub use self::review::{Rating, Review, ReviewId};
pub use self::review_service::ReviewService;
pub use self::stall::{Location, LocationPatch, Stall, StallId, StallPatch};
pub use self::stall_service::{DEFAULT_RADIUS_KM, StallService};
pub use self::user::{Role, User, UserId};
