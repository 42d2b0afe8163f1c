//! Cart Synchronizer
//!
//! Cart lines keyed by product, with quantities and a derived total.

use std::rc::Rc;

use async_trait::async_trait;

use super::optimistic::{OptimisticCollection, Revert};
use super::synchronizer::{MutationOutcome, Synchronizer, Wording};
use crate::api::QuantityService;
use crate::domain::{CartItem, Product};
use crate::notify::{Notice, Notifier};
use crate::session::AuthAware;

pub const CART_WORDING: Wording = Wording {
    noun: "cart",
    sign_in_required: "Please sign in to add items to your cart",
    added: "Added to cart",
    add_failed: "Failed to add item to cart",
    removed: "Removed from cart",
    remove_failed: "Failed to remove item from cart",
    update_failed: "Failed to update quantity",
    cleared: "Cart cleared",
    clear_failed: "Failed to clear cart",
};

/// Take one unit of `product_id` back out, dropping the line at zero.
fn take_one(items: &mut Vec<CartItem>, product_id: &str) {
    if let Some(pos) = items.iter().position(|item| item.product_id == product_id) {
        if items[pos].quantity > 1 {
            items[pos].quantity -= 1;
        } else {
            items.remove(pos);
        }
    }
}

pub struct CartSync<S> {
    inner: Synchronizer<CartItem, S>,
}

impl<S: QuantityService<CartItem>> CartSync<S> {
    pub fn new(service: S, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            inner: Synchronizer::new(service, notifier, &CART_WORDING),
        }
    }

    pub fn collection(&self) -> &OptimisticCollection<CartItem> {
        self.inner.collection()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.inner.collection().items()
    }

    pub fn loading(&self) -> bool {
        self.inner.collection().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.collection().is_authenticated()
    }

    pub fn subscribe(&self, listener: impl Fn(&[CartItem], bool) + 'static) {
        self.inner.collection().subscribe(listener);
    }

    /// Sum of `price * quantity`, computed on every call
    pub fn total(&self) -> f64 {
        self.inner
            .collection()
            .with_items(|items| items.iter().map(CartItem::line_total).sum())
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.inner
            .collection()
            .with_items(|items| items.iter().map(|item| item.quantity).sum())
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.inner
            .collection()
            .find(product_id)
            .map_or(0, |item| item.quantity)
    }

    pub async fn load(&self) {
        self.inner.load().await;
    }

    /// Add one unit of `product`.
    ///
    /// An existing line is bumped by one, otherwise a new line with quantity 1
    /// is appended. On success the cart is reloaded for server-computed
    /// fields; on failure exactly that one unit is taken back out.
    pub async fn add(&self, product: &Product) -> MutationOutcome {
        if self.inner.reject_guest() {
            return MutationOutcome::Rejected;
        }

        let unit = CartItem::from_product(product);
        let product_id = product.id.clone();
        let result = self
            .inner
            .collection()
            .apply_optimistic(
                |items| {
                    match items.iter_mut().find(|item| item.product_id == unit.product_id) {
                        Some(line) => line.quantity += 1,
                        None => items.push(unit.clone()),
                    }
                    Revert::undo(move |items| take_one(items, &product_id))
                },
                || self.inner.service().add(&unit),
            )
            .await;

        match result {
            Ok(()) => {
                self.inner.notify(Notice::success(CART_WORDING.added));
                self.inner.load().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to add {} to cart: {}", product.id, err);
                self.inner
                    .notify(Notice::error(err.user_message(CART_WORDING.add_failed)));
                MutationOutcome::RolledBack
            }
        }
    }

    pub async fn remove(&self, product_id: &str) -> MutationOutcome {
        self.inner.remove(product_id).await
    }

    /// Set the quantity of a line; zero or less removes it.
    pub async fn update_quantity(&self, product_id: &str, quantity: i64) -> MutationOutcome {
        if quantity <= 0 {
            return self.remove(product_id).await;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let service = self.inner.service();
        let target = product_id.to_string();
        let outcome = self
            .inner
            .mutate_association(
                product_id,
                move |items| {
                    let snapshot = items.clone();
                    if let Some(line) = items.iter_mut().find(|item| item.product_id == target) {
                        line.quantity = quantity;
                    }
                    Revert::Snapshot(snapshot)
                },
                |line_id| async move { service.update_quantity(&line_id, quantity).await },
                CART_WORDING.update_failed,
            )
            .await;

        if outcome == MutationOutcome::Applied {
            self.inner.load().await;
        }
        outcome
    }

    pub async fn clear(&self) -> MutationOutcome {
        self.inner.clear().await
    }
}

#[async_trait(?Send)]
impl<S: QuantityService<CartItem>> AuthAware for CartSync<S> {
    async fn activate(&self) {
        self.inner.activate().await;
    }

    fn teardown(&self) {
        self.inner.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: u32) -> CartItem {
        let mut item = CartItem::from_product(&Product::new(id, id, 1.0));
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_take_one_decrements_then_drops() {
        let mut items = vec![line("a", 2), line("b", 1)];
        take_one(&mut items, "a");
        assert_eq!(items[0].quantity, 1);
        take_one(&mut items, "a");
        take_one(&mut items, "b");
        assert!(items.is_empty());
        take_one(&mut items, "missing");
    }
}
