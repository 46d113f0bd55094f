//! Stall directory service: listings, geo queries, and cascading deletes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::access;
use crate::domain::error::DomainError;
use crate::domain::geo::distance_km;
use crate::domain::ports::{
    CreateStallRequest, ImageUpload, ListedStall, MenuItemRepository, MenuItemRepositoryError,
    ObjectStore, ObjectStoreError, ReviewRepository, ReviewRepositoryError, StallDirectory,
    StallQuery, StallRepository, StallRepositoryError, UpdateStallRequest,
};
use crate::domain::stall::{Stall, StallId};
use crate::domain::user::{User, UserId};

/// Distance filter applied when a query centre arrives without a radius.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

fn map_stall_repo_error(error: StallRepositoryError) -> DomainError {
    DomainError::internal(format!("stall repository error: {error}"))
}

fn map_menu_repo_error(error: MenuItemRepositoryError) -> DomainError {
    DomainError::internal(format!("menu item repository error: {error}"))
}

fn map_review_repo_error(error: ReviewRepositoryError) -> DomainError {
    DomainError::internal(format!("review repository error: {error}"))
}

fn map_object_store_error(error: ObjectStoreError) -> DomainError {
    DomainError::internal(format!("object store error: {error}"))
}

/// Stall service implementing the [`StallDirectory`] driving port.
///
/// Holds the menu and review repositories alongside its own so that stall
/// deletion can cascade to the dependent records.
#[derive(Clone)]
pub struct StallService<S, M, V, O> {
    stalls: Arc<S>,
    menu_items: Arc<M>,
    reviews: Arc<V>,
    media: Arc<O>,
}

impl<S, M, V, O> StallService<S, M, V, O> {
    /// Create a new service over the three entity repositories and the
    /// object store.
    pub fn new(stalls: Arc<S>, menu_items: Arc<M>, reviews: Arc<V>, media: Arc<O>) -> Self {
        Self {
            stalls,
            menu_items,
            reviews,
            media,
        }
    }
}

impl<S, M, V, O> StallService<S, M, V, O>
where
    S: StallRepository,
    M: MenuItemRepository,
    V: ReviewRepository,
    O: ObjectStore,
{
    async fn store_image(&self, owner: &UserId, image: &ImageUpload) -> Result<String, DomainError> {
        self.media
            .store(
                &image.bytes,
                &image.content_type,
                &format!("stalls/{owner}"),
            )
            .await
            .map_err(map_object_store_error)
    }

    /// Best-effort cascade: the stall record goes first, then its menu items,
    /// then its reviews, each as an independent single-record delete. A
    /// failure part-way is surfaced as-is; earlier deletions stand.
    async fn cascade_delete(&self, stall_id: &StallId) -> Result<(), DomainError> {
        self.stalls
            .delete(stall_id)
            .await
            .map_err(map_stall_repo_error)?;

        let items = self
            .menu_items
            .list_by_stall(stall_id, None)
            .await
            .map_err(map_menu_repo_error)?;
        for item in &items {
            self.menu_items
                .delete(&item.id)
                .await
                .map_err(map_menu_repo_error)?;
        }

        let reviews = self
            .reviews
            .list_by_stall(stall_id)
            .await
            .map_err(map_review_repo_error)?;
        for review in &reviews {
            self.reviews
                .delete(&review.id)
                .await
                .map_err(map_review_repo_error)?;
        }

        info!(
            %stall_id,
            menu_items = items.len(),
            reviews = reviews.len(),
            "deleted stall and dependants"
        );
        Ok(())
    }
}

#[async_trait]
impl<S, M, V, O> StallDirectory for StallService<S, M, V, O>
where
    S: StallRepository,
    M: MenuItemRepository,
    V: ReviewRepository,
    O: ObjectStore,
{
    async fn create(&self, request: CreateStallRequest) -> Result<Stall, DomainError> {
        access::require_owner(&request.actor)?;

        let image_url = self.store_image(&request.actor.id, &request.image).await?;
        let now = Utc::now();
        let stall = Stall {
            id: StallId::random(),
            owner_id: request.actor.id,
            name: request.name,
            description: request.description,
            location: request.location,
            image_url,
            created_at: now,
            updated_at: now,
        };
        self.stalls
            .put(&stall)
            .await
            .map_err(map_stall_repo_error)?;

        info!(stall_id = %stall.id, owner_id = %stall.owner_id, "created stall");
        Ok(stall)
    }

    async fn list(&self, query: StallQuery) -> Result<Vec<ListedStall>, DomainError> {
        let stalls = self.stalls.list_all().await.map_err(map_stall_repo_error)?;

        let Some(center) = query.center else {
            return Ok(stalls
                .into_iter()
                .map(|stall| ListedStall {
                    stall,
                    distance_km: None,
                })
                .collect());
        };

        let radius = query.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        let mut annotated: Vec<ListedStall> = stalls
            .into_iter()
            .map(|stall| {
                let distance = distance_km(center, stall.location.point());
                ListedStall {
                    stall,
                    distance_km: Some(distance),
                }
            })
            .filter(|listed| listed.distance_km.unwrap_or(f64::MAX) <= radius)
            .collect();
        // Stable sort keeps storage order between equidistant stalls.
        annotated.sort_by(|a, b| {
            a.distance_km
                .unwrap_or(f64::MAX)
                .total_cmp(&b.distance_km.unwrap_or(f64::MAX))
        });
        Ok(annotated)
    }

    async fn get(&self, stall_id: &StallId) -> Result<Stall, DomainError> {
        let found = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        Ok(access::stall_read(found.as_ref())?.clone())
    }

    async fn update(&self, request: UpdateStallRequest) -> Result<Stall, DomainError> {
        let found = self
            .stalls
            .find_by_id(&request.stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        let stall = access::stall_write(&request.actor, found.as_ref())?.clone();

        let mut updated = stall
            .patched(request.patch)
            .map_err(|error| DomainError::invalid_input(error.to_string()))?;
        if let Some(image) = &request.image {
            updated.image_url = self.store_image(&request.actor.id, image).await?;
        }
        updated.updated_at = Utc::now();

        self.stalls
            .put(&updated)
            .await
            .map_err(map_stall_repo_error)?;
        Ok(updated)
    }

    async fn delete(&self, actor: &User, stall_id: &StallId) -> Result<(), DomainError> {
        let found = self
            .stalls
            .find_by_id(stall_id)
            .await
            .map_err(map_stall_repo_error)?;
        access::stall_write(actor, found.as_ref())?;

        if let Err(error) = self.cascade_delete(stall_id).await {
            // Prior deletions in the cascade are not rolled back.
            warn!(%stall_id, %error, "stall cascade delete failed part-way");
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "stall_service_tests.rs"]
mod tests;
