//! Domain Layer - Core Entity Trait
//!
//! Every entry a synchronizer holds is addressed two ways: by the product it
//! refers to (what the UI knows) and by the server-side association record
//! (cart line, wishlist entry) that actually gets deleted or updated.

use std::fmt::Debug;

/// Product identifier as issued by the catalog API
pub type ProductId = String;

/// Core trait for all locally mirrored collection entries
pub trait Entity: Sized + Clone + PartialEq + Debug + 'static {
    /// Returns the client-visible identity (the product id)
    fn id(&self) -> &ProductId;

    /// Returns the server-assigned association id, if this entry has been
    /// confirmed by a load. Optimistic entries carry `None`.
    fn association_id(&self) -> Option<&str>;
}
