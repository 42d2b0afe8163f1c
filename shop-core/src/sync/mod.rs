//! Synchronization Layer
//!
//! Keeps client-local collections approximately consistent with the server:
//! - optimistic: the collection primitive and its rollback machinery
//! - synchronizer: load / remove / clear / auth lifecycle shared by all collections
//! - cart, wishlist: per-collection adapters

mod optimistic;
mod synchronizer;
mod cart;
mod wishlist;


pub use optimistic::{InFlight, Listener, OptimisticCollection, Resolution, Revert};
pub use synchronizer::{MutationOutcome, Synchronizer, Wording};
pub use cart::{CartSync, CART_WORDING};
pub use wishlist::{WishlistSync, WISHLIST_WORDING};
