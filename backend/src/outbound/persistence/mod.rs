//! Persistence adapters.

mod memory;

pub use memory::{
    InMemoryMenuItemRepository, InMemoryReviewRepository, InMemoryStallRepository,
    InMemoryUserRepository,
};
