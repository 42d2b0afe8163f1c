//! API Layer
//!
//! Typed access to the storefront REST backend.
//! - envelope: the `{success, data, error}` response shape
//! - client: authenticated HTTP wrapper
//! - traits: service seams the synchronizers are written against
//! - *_service: REST implementations per concern

mod envelope;
mod client;
mod traits;
mod cart_service;
mod wishlist_service;
mod catalog_service;

pub use envelope::{decode_envelope, ApiResponse, ErrorBody};
pub use client::{path_segment, ApiClient};
pub use traits::{CollectionService, QuantityService};
pub use cart_service::HttpCartService;
pub use wishlist_service::HttpWishlistService;
pub use catalog_service::HttpCatalogService;
