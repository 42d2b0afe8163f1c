//! Synchronizer
//!
//! The parts of cart and wishlist synchronization that do not care which
//! collection they drive: loading, association-level mutations, clearing and
//! the authentication lifecycle.

use std::future::Future;
use std::rc::Rc;

use super::optimistic::{OptimisticCollection, Resolution, Revert};
use crate::api::CollectionService;
use crate::domain::Entity;
use crate::error::ApiResult;
use crate::notify::{Notice, Notifier};

/// What a mutation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Local change kept, server confirmed (or no server counterpart exists)
    Applied,
    /// Server refused; local change undone
    RolledBack,
    /// Not signed in
    Rejected,
    /// Nothing to act on
    Skipped,
    /// Another mutation for the same product is still pending
    Busy,
}

/// User-facing strings for one collection
#[derive(Debug)]
pub struct Wording {
    pub noun: &'static str,
    pub sign_in_required: &'static str,
    pub added: &'static str,
    pub add_failed: &'static str,
    pub removed: &'static str,
    pub remove_failed: &'static str,
    pub update_failed: &'static str,
    pub cleared: &'static str,
    pub clear_failed: &'static str,
}

pub struct Synchronizer<T: Entity, S> {
    collection: OptimisticCollection<T>,
    service: S,
    notifier: Rc<dyn Notifier>,
    wording: &'static Wording,
}

impl<T: Entity, S: CollectionService<T>> Synchronizer<T, S> {
    pub fn new(service: S, notifier: Rc<dyn Notifier>, wording: &'static Wording) -> Self {
        Self {
            collection: OptimisticCollection::new(),
            service,
            notifier,
            wording,
        }
    }

    pub fn collection(&self) -> &OptimisticCollection<T> {
        &self.collection
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn wording(&self) -> &'static Wording {
        self.wording
    }

    pub fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    /// Shows the sign-in notice and returns true when there is no session.
    pub fn reject_guest(&self) -> bool {
        if self.collection.is_authenticated() {
            return false;
        }
        self.notify(Notice::info(self.wording.sign_in_required));
        true
    }

    /// Replace local state with the server's collection.
    ///
    /// Does nothing without a session. On failure the previous items stay.
    pub async fn load(&self) {
        if !self.collection.is_authenticated() {
            return;
        }
        let epoch = self.collection.epoch();
        self.collection.begin_load();

        let result = self.service.fetch_all().await;
        if self.collection.epoch() != epoch {
            log::debug!("Discarding {} load from an ended session", self.wording.noun);
            return;
        }

        match result {
            Ok(items) => {
                log::debug!("Loaded {} {} entries", items.len(), self.wording.noun);
                self.collection.replace(items);
            }
            Err(err) => log::error!("Failed to load {}: {}", self.wording.noun, err),
        }
        self.collection.end_load();
    }

    /// Run a mutation that needs the server association id of `id`.
    ///
    /// Guests have no server counterpart, so their change is applied locally
    /// only. A product with a mutation already pending is left alone.
    pub async fn mutate_association<M, F, Fut>(
        &self,
        id: &str,
        mutate_local: M,
        server_call: F,
        failure: &str,
    ) -> MutationOutcome
    where
        M: FnOnce(&mut Vec<T>) -> Revert<T>,
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ApiResult<()>>,
    {
        if !self.collection.contains(id) {
            log::debug!("{} has no entry for {}", self.wording.noun, id);
            return MutationOutcome::Skipped;
        }
        if !self.collection.is_authenticated() {
            self.collection.mutate(|items| {
                mutate_local(items);
            });
            return MutationOutcome::Applied;
        }

        let Some(_in_flight) = self.collection.try_begin(id) else {
            log::debug!("{} mutation for {} already pending", self.wording.noun, id);
            return MutationOutcome::Busy;
        };

        let association_id = match self
            .collection
            .resolve_association(id, || self.service.fetch_all())
            .await
        {
            Resolution::Found(association_id) => association_id,
            Resolution::Stale => {
                log::warn!(
                    "{} entry for {} no longer exists on the server, resyncing",
                    self.wording.noun,
                    id
                );
                self.load().await;
                return MutationOutcome::Skipped;
            }
            Resolution::Failed(err) => {
                log::error!("Could not resolve {} entry for {}: {}", self.wording.noun, id, err);
                self.notify(Notice::error(err.user_message(failure)));
                return MutationOutcome::Skipped;
            }
        };

        match self
            .collection
            .apply_optimistic(mutate_local, || server_call(association_id))
            .await
        {
            Ok(()) => MutationOutcome::Applied,
            Err(err) => {
                log::error!("{} mutation for {} failed: {}", self.wording.noun, id, err);
                self.notify(Notice::error(err.user_message(failure)));
                MutationOutcome::RolledBack
            }
        }
    }

    /// Remove the entry for `id`, restoring the prior snapshot on failure.
    pub async fn remove(&self, id: &str) -> MutationOutcome {
        let service = &self.service;
        let target = id.to_string();
        let outcome = self
            .mutate_association(
                id,
                move |items| {
                    let snapshot = items.clone();
                    items.retain(|item| item.id() != &target);
                    Revert::Snapshot(snapshot)
                },
                |association_id| async move { service.remove(&association_id).await },
                self.wording.remove_failed,
            )
            .await;

        if outcome == MutationOutcome::Applied && self.collection.is_authenticated() {
            self.notify(Notice::success(self.wording.removed));
        }
        outcome
    }

    /// Empty the collection. Guests only lose local state.
    pub async fn clear(&self) -> MutationOutcome {
        if !self.collection.is_authenticated() {
            self.collection.mutate(Vec::clear);
            return MutationOutcome::Applied;
        }

        match self
            .collection
            .apply_optimistic(
                |items| Revert::Snapshot(std::mem::take(items)),
                || self.service.clear(),
            )
            .await
        {
            Ok(()) => {
                self.notify(Notice::success(self.wording.cleared));
                MutationOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to clear {}: {}", self.wording.noun, err);
                self.notify(Notice::error(err.user_message(self.wording.clear_failed)));
                MutationOutcome::RolledBack
            }
        }
    }

    /// Session started: load once on the false -> true transition.
    pub async fn activate(&self) {
        if self.collection.set_authenticated(true) {
            self.load().await;
        }
    }

    /// Session ended: forget local state without touching the network.
    pub fn teardown(&self) {
        self.collection.teardown();
    }
}
