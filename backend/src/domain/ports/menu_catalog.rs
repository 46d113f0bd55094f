//! Driving port for menu management use-cases.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::menu::{MenuItem, MenuItemId, MenuItemPatch};
use crate::domain::ports::object_store::ImageUpload;
use crate::domain::stall::StallId;
use crate::domain::user::User;

/// Parameters for creating a menu item under a stall.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMenuItemRequest {
    /// The acting user; must own the stall.
    pub actor: User,
    /// Parent stall.
    pub stall_id: StallId,
    /// Dish name.
    pub name: String,
    /// Non-negative price.
    pub price: f64,
    /// Longer description.
    pub description: String,
    /// Free-form category.
    pub category: String,
    /// Dish image, stored before the record is written.
    pub image: ImageUpload,
}

/// Parameters for partially updating a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMenuItemRequest {
    /// The acting user; must own the stall.
    pub actor: User,
    /// Addressed stall; must match the item's parent reference.
    pub stall_id: StallId,
    /// Addressed menu item.
    pub item_id: MenuItemId,
    /// Fields to change; absent fields keep their stored value.
    pub patch: MenuItemPatch,
    /// Replacement image, if supplied.
    pub image: Option<ImageUpload>,
}

/// Domain use-case port for the menu catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    /// Create a menu item under a stall owned by the actor.
    async fn create(&self, request: CreateMenuItemRequest) -> Result<MenuItem, DomainError>;

    /// List a stall's menu items, optionally narrowed to an exact category.
    async fn list<'a>(
        &self,
        stall_id: &StallId,
        category: Option<&'a str>,
    ) -> Result<Vec<MenuItem>, DomainError>;

    /// Partially update a menu item under a stall owned by the actor.
    async fn update(&self, request: UpdateMenuItemRequest) -> Result<MenuItem, DomainError>;

    /// Delete a menu item under a stall owned by the actor.
    async fn delete(
        &self,
        actor: &User,
        stall_id: &StallId,
        item_id: &MenuItemId,
    ) -> Result<(), DomainError>;

    /// Delete every menu item of a stall matching a category (best effort,
    /// no rollback).
    async fn delete_by_category(
        &self,
        actor: &User,
        stall_id: &StallId,
        category: &str,
    ) -> Result<(), DomainError>;
}
