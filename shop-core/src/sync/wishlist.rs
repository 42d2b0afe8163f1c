//! Wishlist Synchronizer

use std::rc::Rc;

use async_trait::async_trait;

use super::optimistic::{OptimisticCollection, Revert};
use super::synchronizer::{MutationOutcome, Synchronizer, Wording};
use crate::api::CollectionService;
use crate::domain::{Product, WishlistItem};
use crate::notify::{Notice, Notifier};
use crate::session::AuthAware;

pub const WISHLIST_WORDING: Wording = Wording {
    noun: "wishlist",
    sign_in_required: "Please sign in to save items to your wishlist",
    added: "Added to wishlist",
    add_failed: "Failed to add item to wishlist",
    removed: "Removed from wishlist",
    remove_failed: "Failed to remove item from wishlist",
    update_failed: "Failed to update wishlist",
    cleared: "Wishlist cleared",
    clear_failed: "Failed to clear wishlist",
};

pub struct WishlistSync<S> {
    inner: Synchronizer<WishlistItem, S>,
}

impl<S: CollectionService<WishlistItem>> WishlistSync<S> {
    pub fn new(service: S, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            inner: Synchronizer::new(service, notifier, &WISHLIST_WORDING),
        }
    }

    pub fn collection(&self) -> &OptimisticCollection<WishlistItem> {
        self.inner.collection()
    }

    pub fn items(&self) -> Vec<WishlistItem> {
        self.inner.collection().items()
    }

    pub fn loading(&self) -> bool {
        self.inner.collection().is_loading()
    }

    pub fn count(&self) -> usize {
        self.inner.collection().len()
    }

    pub fn subscribe(&self, listener: impl Fn(&[WishlistItem], bool) + 'static) {
        self.inner.collection().subscribe(listener);
    }

    /// Local membership check, no network
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.inner.collection().contains(product_id)
    }

    pub async fn load(&self) {
        self.inner.load().await;
    }

    /// Save `product`.
    ///
    /// A product already held locally is not duplicated. If the server says
    /// the entry already exists, the refusal is not shown to the shopper and
    /// the wishlist is reloaded, since local state was evidently behind.
    pub async fn add(&self, product: &Product) -> MutationOutcome {
        if self.inner.reject_guest() {
            return MutationOutcome::Rejected;
        }

        let entry = WishlistItem::from_product(product);
        let product_id = product.id.clone();
        let result = self
            .inner
            .collection()
            .apply_optimistic(
                |items| {
                    if items.iter().any(|item| item.product_id == entry.product_id) {
                        return Revert::Nothing;
                    }
                    items.push(entry.clone());
                    Revert::undo(move |items: &mut Vec<WishlistItem>| {
                        items.retain(|item| !(item.product_id == product_id && item.entry_id.is_none()))
                    })
                },
                || self.inner.service().add(&entry),
            )
            .await;

        match result {
            Ok(()) => {
                self.inner.notify(Notice::success(WISHLIST_WORDING.added));
                self.inner.load().await;
                MutationOutcome::Applied
            }
            Err(err) if err.is_duplicate() => {
                log::debug!("{} already in wishlist on the server", product.id);
                self.inner.load().await;
                MutationOutcome::RolledBack
            }
            Err(err) => {
                log::error!("Failed to add {} to wishlist: {}", product.id, err);
                self.inner
                    .notify(Notice::error(err.user_message(WISHLIST_WORDING.add_failed)));
                MutationOutcome::RolledBack
            }
        }
    }

    pub async fn remove(&self, product_id: &str) -> MutationOutcome {
        self.inner.remove(product_id).await
    }

    /// Add when absent, remove when present
    pub async fn toggle(&self, product: &Product) -> MutationOutcome {
        if self.is_in_wishlist(&product.id) {
            self.remove(&product.id).await
        } else {
            self.add(product).await
        }
    }

    pub async fn clear(&self) -> MutationOutcome {
        self.inner.clear().await
    }
}

#[async_trait(?Send)]
impl<S: CollectionService<WishlistItem>> AuthAware for WishlistSync<S> {
    async fn activate(&self) {
        self.inner.activate().await;
    }

    fn teardown(&self) {
        self.inner.teardown();
    }
}
