//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`IdentityStore`], [`StallDirectory`], [`MenuCatalog`],
//! [`ReviewLedger`]) are what inbound adapters call; driven ports (the
//! repositories and the credential, token, and object-store collaborators)
//! are what domain services call outward.

mod credential_hasher;
mod identity_store;
mod menu_catalog;
mod menu_item_repository;
mod object_store;
mod review_ledger;
mod review_repository;
mod stall_directory;
mod stall_repository;
mod token_service;
mod user_repository;

pub use credential_hasher::{CredentialError, CredentialHasher};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use identity_store::{IdentityStore, RegisterUserRequest};
#[cfg(test)]
pub use identity_store::MockIdentityStore;
pub use menu_catalog::{CreateMenuItemRequest, MenuCatalog, UpdateMenuItemRequest};
#[cfg(test)]
pub use menu_catalog::MockMenuCatalog;
pub use menu_item_repository::{MenuItemRepository, MenuItemRepositoryError};
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
pub use object_store::{ImageUpload, ObjectStore, ObjectStoreError};
#[cfg(test)]
pub use object_store::MockObjectStore;
pub use review_ledger::{ReviewLedger, SubmitReviewRequest, UpdateReviewRequest};
#[cfg(test)]
pub use review_ledger::MockReviewLedger;
pub use review_repository::{ReviewRepository, ReviewRepositoryError};
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use stall_directory::{
    CreateStallRequest, ListedStall, StallDirectory, StallQuery, UpdateStallRequest,
};
#[cfg(test)]
pub use stall_directory::MockStallDirectory;
pub use stall_repository::{StallRepository, StallRepositoryError};
#[cfg(test)]
pub use stall_repository::MockStallRepository;
pub use token_service::{TokenError, TokenService};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
