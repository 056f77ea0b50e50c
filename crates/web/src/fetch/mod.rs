//! Fetch coordination: issue each remote request at most once per index selection.
//!
//! Responsibilities:
//! - On observation of an `Unrequested` slot, spawn the request for it.
//! - Send the result back through the completion channel, stamped with
//!   the store epoch it was issued under.
//!
//! Does NOT handle:
//! - Applying results to the state (the session loop calls `Store::complete`).
//! - Retrying failures; a failed slot stays failed until the index changes.
//!
//! Invariants:
//! - At most one request per slot and epoch, however often a slot is observed.
//! - Every issued request produces exactly one completion (unless the
//!   receiver is gone).
//! - The issued set is cleared whenever the store epoch moves.

mod api;
mod resource;


pub use api::SearchApi;
pub use resource::{Fields, Projects, Resource, Slots, Suggestions, UserGroups};

use std::future::Future;

use tokio::sync::mpsc::Sender;
use tracing::{debug, trace, warn};

use crate::query_sync::Location;
use crate::remote_data::RemoteData;
use crate::store::{Completion, Store};

/// Tracks which slots have a request issued for the current epoch.
#[derive(Debug)]
pub struct FetchCoordinator {
    tx: Sender<Completion>,
    issued: Slots,
    epoch: u64,
}

impl FetchCoordinator {
    pub fn new(tx: Sender<Completion>) -> Self {
        Self {
            tx,
            issued: Slots::empty(),
            epoch: 0,
        }
    }

    /// Slots with a request issued in the current epoch.
    pub fn issued(&self) -> Slots {
        self.issued
    }

    fn sync_epoch(&mut self, epoch: u64) {
        if epoch != self.epoch {
            trace!(from = self.epoch, to = epoch, "Epoch changed, clearing issued slots");
            self.epoch = epoch;
            self.issued = Slots::empty();
        }
    }

    /// Observe the slot of `R`, calling `fetch` if it still needs loading.
    ///
    /// Returns true when a request was issued.
    pub fn observe<R, L, F, Fut>(&mut self, store: &Store<L>, fetch: F) -> bool
    where
        R: Resource,
        L: Location,
        F: FnOnce() -> Fut,
        Fut: Future<Output = monocle_client::Result<R::Payload>> + Send + 'static,
    {
        self.sync_epoch(store.epoch());

        if R::slot(store.state()).is_settled() || self.issued.contains(R::SLOT) {
            return false;
        }
        self.issued.insert(R::SLOT);

        debug!(resource = R::NAME, epoch = self.epoch, "Issuing fetch");
        spawn_fetch::<R, _>(self.tx.clone(), self.epoch, fetch());
        true
    }

    pub fn ensure_suggestions<A: SearchApi, L: Location>(
        &mut self,
        store: &Store<L>,
        api: &A,
    ) -> bool {
        let api = api.clone();
        let index = store.state().selected_index().to_string();
        self.observe::<Suggestions, _, _, _>(store, move || async move {
            api.suggestions(&index).await
        })
    }

    pub fn ensure_fields<A: SearchApi, L: Location>(&mut self, store: &Store<L>, api: &A) -> bool {
        let api = api.clone();
        self.observe::<Fields, _, _, _>(store, move || async move { api.fields().await })
    }

    pub fn ensure_user_groups<A: SearchApi, L: Location>(
        &mut self,
        store: &Store<L>,
        api: &A,
    ) -> bool {
        let api = api.clone();
        let index = store.state().selected_index().to_string();
        self.observe::<UserGroups, _, _, _>(store, move || async move {
            api.user_groups(&index).await
        })
    }

    pub fn ensure_projects<A: SearchApi, L: Location>(
        &mut self,
        store: &Store<L>,
        api: &A,
    ) -> bool {
        let api = api.clone();
        let index = store.state().selected_index().to_string();
        self.observe::<Projects, _, _, _>(store, move || async move {
            api.projects(&index).await
        })
    }

    /// Observe every slot in `slots`. Returns the slots a request was issued for.
    pub fn ensure<A: SearchApi, L: Location>(
        &mut self,
        slots: Slots,
        store: &Store<L>,
        api: &A,
    ) -> Slots {
        // A view reading no slots still has to drop the previous epoch's flags.
        self.sync_epoch(store.epoch());
        let mut started = Slots::empty();
        if slots.contains(Slots::SUGGESTIONS) && self.ensure_suggestions(store, api) {
            started |= Slots::SUGGESTIONS;
        }
        if slots.contains(Slots::FIELDS) && self.ensure_fields(store, api) {
            started |= Slots::FIELDS;
        }
        if slots.contains(Slots::USER_GROUPS) && self.ensure_user_groups(store, api) {
            started |= Slots::USER_GROUPS;
        }
        if slots.contains(Slots::PROJECTS) && self.ensure_projects(store, api) {
            started |= Slots::PROJECTS;
        }
        started
    }
}

/// Await `request` on a new task and send its completion.
fn spawn_fetch<R, Fut>(tx: Sender<Completion>, epoch: u64, request: Fut)
where
    R: Resource,
    Fut: Future<Output = monocle_client::Result<R::Payload>> + Send + 'static,
{
    tokio::spawn(async move {
        let data = RemoteData::from(request.await);
        if let Some(message) = data.failure() {
            warn!(resource = R::NAME, epoch, error = %message, "Fetch failed");
        }
        let completion = Completion {
            epoch,
            action: R::into_action(data),
        };
        if tx.send(completion).await.is_err() {
            debug!(resource = R::NAME, "Completion receiver dropped");
        }
    });
}
