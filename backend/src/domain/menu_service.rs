//! Menu catalog service: per-stall dish management.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::access;
use crate::domain::error::DomainError;
use crate::domain::menu::{self, MenuItem, MenuItemId};
use crate::domain::ports::{
    CreateMenuItemRequest, ImageUpload, MenuCatalog, MenuItemRepository, MenuItemRepositoryError,
    ObjectStore, ObjectStoreError, StallRepository, StallRepositoryError, UpdateMenuItemRequest,
};
use crate::domain::stall::StallId;
use crate::domain::user::User;

fn map_stall_repo_error(error: StallRepositoryError) -> DomainError {
    DomainError::internal(format!("stall repository error: {error}"))
}

fn map_menu_repo_error(error: MenuItemRepositoryError) -> DomainError {
    DomainError::internal(format!("menu item repository error: {error}"))
}

fn map_object_store_error(error: ObjectStoreError) -> DomainError {
    DomainError::internal(format!("object store error: {error}"))
}

/// Menu service implementing the [`MenuCatalog`] driving port.
#[derive(Clone)]
pub struct MenuService<S, M, O> {
    stalls: Arc<S>,
    menu_items: Arc<M>,
    media: Arc<O>,
}

impl<S, M, O> MenuService<S, M, O> {
    /// Create a new service over the stall and menu repositories and the
    /// object store.
    pub fn new(stalls: Arc<S>, menu_items: Arc<M>, media: Arc<O>) -> Self {
        Self {
            stalls,
            menu_items,
            media,
        }
    }
}

impl<S, M, O> MenuService<S, M, O>
where
    S: StallRepository,
    M: MenuItemRepository,
    O: ObjectStore,
{
    async fn store_image(
        &self,
        stall_id: &StallId,
        image: &ImageUpload,
    ) -> Result<String, DomainError> {
        self.media
            .store(
                &image.bytes,
                &image.content_type,
                &format!("menu-items/{stall_id}"),
            )
            .await
            .map_err(map_object_store_error)
    }

    /// Authorize a write that creates or bulk-deletes items under a stall:
    /// the stall must exist and belong to the actor.
    async fn authorize_stall_write(
        &self,
        actor: &User,
        stall_id: &StallId,
    ) -> Result<(), DomainError> {
        let stall = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        access::stall_write(actor, stall.as_ref())?;
        Ok(())
    }

    /// Authorize a write against an existing item, returning the stored
    /// record once the ownership chain checks out.
    async fn authorize_item_write(
        &self,
        actor: &User,
        stall_id: &StallId,
        item_id: &MenuItemId,
    ) -> Result<MenuItem, DomainError> {
        let stall = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        let item = self
            .menu_items
            .find_by_id(item_id)
            .await
            .map_err(map_menu_repo_error)?;
        Ok(access::menu_item_write(actor, stall.as_ref(), stall_id, item.as_ref())?.clone())
    }
}

#[async_trait]
impl<S, M, O> MenuCatalog for MenuService<S, M, O>
where
    S: StallRepository,
    M: MenuItemRepository,
    O: ObjectStore,
{
    async fn create(&self, request: CreateMenuItemRequest) -> Result<MenuItem, DomainError> {
        self.authorize_stall_write(&request.actor, &request.stall_id)
            .await?;
        let price = menu::validate_price(request.price)
            .map_err(|error| DomainError::invalid_input(error.to_string()))?;

        let image_url = self.store_image(&request.stall_id, &request.image).await?;
        let now = Utc::now();
        let item = MenuItem {
            id: MenuItemId::random(),
            stall_id: request.stall_id,
            name: request.name,
            price,
            description: request.description,
            category: request.category,
            image_url,
            created_at: now,
            updated_at: now,
        };
        self.menu_items
            .put(&item)
            .await
            .map_err(map_menu_repo_error)?;

        info!(item_id = %item.id, stall_id = %item.stall_id, "created menu item");
        Ok(item)
    }

    async fn list<'a>(
        &self,
        stall_id: &StallId,
        category: Option<&'a str>,
    ) -> Result<Vec<MenuItem>, DomainError> {
        let stall = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        access::stall_read(stall.as_ref())?;

        self.menu_items
            .list_by_stall(stall_id, category)
            .await
            .map_err(map_menu_repo_error)
    }

    async fn update(&self, request: UpdateMenuItemRequest) -> Result<MenuItem, DomainError> {
        let item = self
            .authorize_item_write(&request.actor, &request.stall_id, &request.item_id)
            .await?;

        let mut updated = item
            .patched(request.patch)
            .map_err(|error| DomainError::invalid_input(error.to_string()))?;
        if let Some(image) = &request.image {
            updated.image_url = self.store_image(&request.stall_id, image).await?;
        }
        updated.updated_at = Utc::now();

        self.menu_items
            .put(&updated)
            .await
            .map_err(map_menu_repo_error)?;
        Ok(updated)
    }

    async fn delete(
        &self,
        actor: &User,
        stall_id: &StallId,
        item_id: &MenuItemId,
    ) -> Result<(), DomainError> {
        self.authorize_item_write(actor, stall_id, item_id).await?;
        self.menu_items
            .delete(item_id)
            .await
            .map_err(map_menu_repo_error)
    }

    async fn delete_by_category(
        &self,
        actor: &User,
        stall_id: &StallId,
        category: &str,
    ) -> Result<(), DomainError> {
        self.authorize_stall_write(actor, stall_id).await?;

        let items = self
            .menu_items
            .list_by_stall(stall_id, Some(category))
            .await
            .map_err(map_menu_repo_error)?;
        // Independent single-record deletes; a failure part-way leaves the
        // earlier ones deleted.
        for item in &items {
            self.menu_items
                .delete(&item.id)
                .await
                .map_err(map_menu_repo_error)?;
        }

        info!(%stall_id, category, deleted = items.len(), "deleted menu items by category");
        Ok(())
    }
}

#[cfg(test)]
#[path = "menu_service_tests.rs"]
mod tests;
