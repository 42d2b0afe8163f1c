//! API Layer - Service Traits
//!
//! Abstract interfaces the synchronizers are written against.
//! The storefront runs on one cooperative thread, so futures are not `Send`.

use async_trait::async_trait;

use crate::domain::Entity;
use crate::error::ApiResult;

/// Server-side collection of association records (cart lines, wishlist entries)
#[async_trait(?Send)]
pub trait CollectionService<T: Entity> {
    /// Fetch the whole collection as the server sees it
    async fn fetch_all(&self) -> ApiResult<Vec<T>>;

    /// Create an association for `entry`.
    ///
    /// For quantity collections the entry's quantity is the amount to add.
    async fn add(&self, entry: &T) -> ApiResult<()>;

    /// Delete an association by its server id
    async fn remove(&self, association_id: &str) -> ApiResult<()>;

    /// Delete every association
    async fn clear(&self) -> ApiResult<()>;
}

/// Extension for collections whose entries carry a quantity
#[async_trait(?Send)]
pub trait QuantityService<T: Entity>: CollectionService<T> {
    async fn update_quantity(&self, association_id: &str, quantity: u32) -> ApiResult<()>;
}
