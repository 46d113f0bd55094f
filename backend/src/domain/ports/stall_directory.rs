//! Driving port for stall listing and management use-cases.

use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::geo::GeoPoint;
use crate::domain::ports::object_store::ImageUpload;
use crate::domain::stall::{Location, Stall, StallId, StallPatch};
use crate::domain::user::User;

/// Parameters for creating a stall.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStallRequest {
    /// The acting user; must hold the owner role.
    pub actor: User,
    /// Stall name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Validated physical location.
    pub location: Location,
    /// Stall image, stored before the record is written.
    pub image: ImageUpload,
}

/// Parameters for partially updating a stall.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStallRequest {
    /// The acting user; must own the stall.
    pub actor: User,
    /// Addressed stall.
    pub stall_id: StallId,
    /// Fields to change; absent fields keep their stored value.
    pub patch: StallPatch,
    /// Replacement image, if supplied.
    pub image: Option<ImageUpload>,
}

/// Geographic narrowing for stall listings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StallQuery {
    /// Centre to measure distances from; `None` lists everything.
    pub center: Option<GeoPoint>,
    /// Maximum distance in kilometres; defaults to 5 km when a centre is
    /// supplied without a radius.
    pub radius_km: Option<f64>,
}

/// A listed stall, annotated with its distance from the query centre when
/// one was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedStall {
    /// The stall record.
    pub stall: Stall,
    /// Great-circle distance from the query centre, in kilometres.
    pub distance_km: Option<f64>,
}

/// Domain use-case port for the stall directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StallDirectory: Send + Sync {
    /// Create a stall for an owner-role actor.
    async fn create(&self, request: CreateStallRequest) -> Result<Stall, DomainError>;

    /// List stalls, geo-filtered and distance-sorted when a centre is given,
    /// otherwise in storage order.
    async fn list(&self, query: StallQuery) -> Result<Vec<ListedStall>, DomainError>;

    /// Fetch a single stall.
    async fn get(&self, stall_id: &StallId) -> Result<Stall, DomainError>;

    /// Partially update a stall owned by the actor.
    async fn update(&self, request: UpdateStallRequest) -> Result<Stall, DomainError>;

    /// Delete a stall owned by the actor, cascading to its menu items and
    /// reviews (best effort, no rollback).
    async fn delete(&self, actor: &User, stall_id: &StallId) -> Result<(), DomainError>;
}
