//! Optimistic Collection
//!
//! A client-held mirror of a server collection. Local writes land immediately
//! and are announced to listeners before any network call suspends; failed
//! server calls are undone through the `Revert` the write produced.
//!
//! Everything here runs on one cooperative thread. Borrows of the inner
//! `RefCell`s never live across an `.await`.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::future::Future;

use crate::domain::{Entity, ProductId};
use crate::error::{ApiError, ApiResult};

/// Called with the current items and loading flag after every change.
/// Listeners must not write back into the collection.
pub type Listener<T> = Box<dyn Fn(&[T], bool)>;

/// How to undo an optimistic write
pub enum Revert<T> {
    /// Replace the whole collection with this copy
    Snapshot(Vec<T>),
    /// Apply the exact inverse of the write
    Undo(Box<dyn FnOnce(&mut Vec<T>)>),
    /// The write changed nothing
    Nothing,
}

impl<T> Revert<T> {
    pub fn undo(f: impl FnOnce(&mut Vec<T>) + 'static) -> Self {
        Revert::Undo(Box::new(f))
    }
}

/// Result of looking up the server-side association id for a product
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(String),
    /// The server has no association for this product any more
    Stale,
    Failed(ApiError),
}

pub struct OptimisticCollection<T: Entity> {
    items: RefCell<Vec<T>>,
    pending_loads: Cell<u32>,
    authenticated: Cell<bool>,
    /// Bumped on teardown so late responses from an ended session are dropped
    epoch: Cell<u64>,
    in_flight: RefCell<HashSet<ProductId>>,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T: Entity> Default for OptimisticCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> OptimisticCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            pending_loads: Cell::new(0),
            authenticated: Cell::new(false),
            epoch: Cell::new(0),
            in_flight: RefCell::new(HashSet::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    // ========================
    // Reads
    // ========================

    pub fn items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.borrow().iter().any(|item| item.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.items.borrow().iter().find(|item| item.id() == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads.get() > 0
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    // ========================
    // Writes
    // ========================

    pub fn subscribe(&self, listener: impl Fn(&[T], bool) + 'static) {
        let listener: Listener<T> = Box::new(listener);
        listener(&self.items.borrow(), self.is_loading());
        self.listeners.borrow_mut().push(listener);
    }

    fn notify(&self) {
        let items = self.items.borrow();
        let loading = self.is_loading();
        for listener in self.listeners.borrow().iter() {
            listener(&items, loading);
        }
    }

    /// Apply a local write and announce it
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = f(&mut self.items.borrow_mut());
        self.notify();
        result
    }

    /// Replace local state wholesale with server truth
    pub fn replace(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items;
        self.notify();
    }

    pub(crate) fn begin_load(&self) {
        self.pending_loads.set(self.pending_loads.get() + 1);
        self.notify();
    }

    pub(crate) fn end_load(&self) {
        self.pending_loads.set(self.pending_loads.get().saturating_sub(1));
        self.notify();
    }

    /// Returns true if the flag actually changed.
    pub fn set_authenticated(&self, authenticated: bool) -> bool {
        self.authenticated.replace(authenticated) != authenticated
    }

    /// Forget everything local; the server keeps its own copy.
    pub fn teardown(&self) {
        self.authenticated.set(false);
        self.epoch.set(self.epoch.get() + 1);
        self.pending_loads.set(0);
        self.replace(Vec::new());
    }

    fn revert(&self, revert: Revert<T>) {
        match revert {
            Revert::Snapshot(items) => self.replace(items),
            Revert::Undo(undo) => self.mutate(undo),
            Revert::Nothing => {}
        }
    }

    // ========================
    // Optimistic updates
    // ========================

    /// Apply `mutate_local` now, then run `server_call`; undo the write if the
    /// call fails.
    ///
    /// The rollback is skipped when the session ended while the call was in
    /// flight, since there is no longer any local state to restore into.
    pub async fn apply_optimistic<R, M, F, Fut>(&self, mutate_local: M, server_call: F) -> ApiResult<R>
    where
        M: FnOnce(&mut Vec<T>) -> Revert<T>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<R>>,
    {
        let epoch = self.epoch.get();
        let revert = self.mutate(mutate_local);

        match server_call().await {
            Ok(value) => Ok(value),
            Err(err) => {
                if self.epoch.get() == epoch {
                    self.revert(revert);
                } else {
                    log::debug!("Session ended mid-request, skipping rollback");
                }
                Err(err)
            }
        }
    }

    /// Mark `id` as having a mutation in flight. `None` if one already is.
    pub fn try_begin(&self, id: &str) -> Option<InFlight<'_, T>> {
        if !self.in_flight.borrow_mut().insert(id.to_string()) {
            return None;
        }
        Some(InFlight {
            collection: self,
            id: id.to_string(),
        })
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.borrow().contains(id)
    }

    /// Find the server association id for `id`.
    ///
    /// Ids cached at load time are used directly; only entries that exist
    /// optimistically fall back to one authoritative fetch.
    pub async fn resolve_association<F, Fut>(&self, id: &str, refetch: F) -> Resolution
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<Vec<T>>>,
    {
        let cached = self.with_items(|items| {
            items
                .iter()
                .find(|item| item.id() == id)
                .and_then(|item| item.association_id().map(str::to_owned))
        });
        if let Some(association_id) = cached {
            return Resolution::Found(association_id);
        }

        log::debug!("No cached association for {}, fetching", id);
        match refetch().await {
            Ok(fetched) => fetched
                .iter()
                .find(|item| item.id() == id)
                .and_then(|item| item.association_id().map(str::to_owned))
                .map_or(Resolution::Stale, Resolution::Found),
            Err(err) => Resolution::Failed(err),
        }
    }
}

/// Clears the in-flight mark for one product when dropped
pub struct InFlight<'a, T: Entity> {
    collection: &'a OptimisticCollection<T>,
    id: ProductId,
}

impl<T: Entity> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        self.collection.in_flight.borrow_mut().remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, WishlistItem};
    use std::rc::Rc;

    fn entry(id: &str, entry_id: Option<&str>) -> WishlistItem {
        let mut item = WishlistItem::from_product(&Product::new(id, id, 10.0));
        item.entry_id = entry_id.map(str::to_owned);
        item
    }

    #[tokio::test]
    async fn test_failed_call_restores_snapshot() {
        let collection = OptimisticCollection::new();
        collection.replace(vec![entry("a", Some("e1")), entry("b", Some("e2"))]);
        let before = collection.items();

        let result: ApiResult<()> = collection
            .apply_optimistic(
                |items| Revert::Snapshot(std::mem::take(items)),
                || async { Err(ApiError::Status(500)) },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(collection.items(), before);
    }

    #[tokio::test]
    async fn test_write_is_visible_before_call_resolves() {
        let collection = OptimisticCollection::new();
        let result: ApiResult<usize> = collection
            .apply_optimistic(
                |items| {
                    items.push(entry("a", None));
                    Revert::Nothing
                },
                || async { Ok(collection.len()) },
            )
            .await;
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_teardown_during_call_skips_rollback() {
        let collection = OptimisticCollection::new();
        collection.replace(vec![entry("a", Some("e1"))]);

        let _: ApiResult<()> = collection
            .apply_optimistic(
                |items| Revert::Snapshot(std::mem::take(items)),
                || async {
                    collection.teardown();
                    Err(ApiError::Status(500))
                },
            )
            .await;

        assert!(collection.is_empty());
    }

    #[test]
    fn test_in_flight_guard_releases_on_drop() {
        let collection: OptimisticCollection<WishlistItem> = OptimisticCollection::new();
        let guard = collection.try_begin("a");
        assert!(guard.is_some());
        assert!(collection.try_begin("a").is_none());
        assert!(collection.try_begin("b").is_some());
        drop(guard);
        assert!(!collection.is_in_flight("a"));
        assert!(collection.try_begin("a").is_some());
    }

    #[test]
    fn test_listeners_see_every_write() {
        let collection = OptimisticCollection::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        collection.subscribe(move |items: &[WishlistItem], _| sink.borrow_mut().push(items.len()));

        collection.mutate(|items| items.push(entry("a", None)));
        collection.mutate(|items| items.push(entry("b", None)));
        collection.teardown();

        assert_eq!(*seen.borrow(), vec![0, 1, 2, 0]);
    }

    #[tokio::test]
    async fn test_resolution_prefers_cached_id() {
        let collection = OptimisticCollection::new();
        collection.replace(vec![entry("a", Some("e1")), entry("b", None)]);

        let refetched = Cell::new(false);
        let cached = collection
            .resolve_association("a", || async {
                refetched.set(true);
                Ok(Vec::new())
            })
            .await;
        assert_eq!(cached, Resolution::Found("e1".into()));
        assert!(!refetched.get());

        let fetched = collection
            .resolve_association("b", || async { Ok(vec![entry("b", Some("e7"))]) })
            .await;
        assert_eq!(fetched, Resolution::Found("e7".into()));

        let stale = collection
            .resolve_association("b", || async { Ok(Vec::new()) })
            .await;
        assert_eq!(stale, Resolution::Stale);
    }
}
