//! Single-consumer loop over one store.
//!
//! Responsibilities:
//! - Route the current location and observe the slots its view reads.
//! - Receive completions and apply them to the store.
//! - Produce serializable snapshots of what a page would render.
//!
//! Invariants:
//! - Only this type mutates the store; completions are applied in the order received.
//! - After every state change the current view's slots are observed again.

use monocle_config::constants::DEFAULT_CHANNEL_CAPACITY;
use serde::Serialize;
use tokio::sync::mpsc::{self, Receiver};
use tracing::{debug, info};
use url::Url;

use crate::fetch::{FetchCoordinator, SearchApi, Slots};
use crate::query_sync::Location;
use crate::route::{NavEntry, Route};
use crate::store::{Action, Completion, State, Store};

/// One navigation menu link as rendered for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Render-ready view of a session.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub url: String,
    pub route: Route,
    pub epoch: u64,
    pub nav: Vec<NavLink>,
    pub state: State,
}

/// Owns the store, the fetch coordinator and the completion channel.
#[derive(Debug)]
pub struct Session<A, L> {
    store: Store<L>,
    coordinator: FetchCoordinator,
    rx: Receiver<Completion>,
    api: A,
}

impl<A: SearchApi, L: Location> Session<A, L> {
    /// Start a session at `location`, selecting the index from its path.
    pub fn new(api: A, location: L) -> Self {
        Self::with_capacity(api, location, DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_capacity(api: A, location: L, capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        Self {
            store: Store::from_location(location),
            coordinator: FetchCoordinator::new(tx),
            rx,
            api,
        }
    }

    pub fn store(&self) -> &Store<L> {
        &self.store
    }

    /// Route of the current location.
    pub fn route(&self) -> Route {
        Route::from_url(self.store.location().current())
    }

    /// Observe the slots the current view reads. Returns the slots a
    /// request was issued for.
    pub fn activate(&mut self) -> Slots {
        let required = self.route().view.required_slots();
        let started = self.coordinator.ensure(required, &self.store, &self.api);
        if !started.is_empty() {
            debug!(?started, epoch = self.store.epoch(), "Requests issued");
        }
        started
    }

    /// Issued slots still waiting for a result.
    pub fn pending(&self) -> Slots {
        let issued = self.coordinator.issued();
        issued - issued.settled_in(self.store.state())
    }

    /// Apply one completion and observe the view again.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let applied = self.store.complete(completion);
        self.activate();
        applied
    }

    /// Run until every slot the current view reads holds a result.
    pub async fn settle(&mut self) {
        self.activate();
        while !self.pending().is_empty() {
            match self.rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
        info!(
            index = self.store.state().selected_index(),
            epoch = self.store.epoch(),
            "Session settled"
        );
    }

    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
        self.activate();
    }

    pub fn navigate(&mut self, url: Url) {
        self.store.navigate(url);
        self.activate();
    }

    pub fn snapshot(&self) -> Snapshot {
        let route = self.route();
        let state = self.store.state();
        let active = route.active_entry();
        let nav = if state.selected_index().is_empty() {
            Vec::new()
        } else {
            NavEntry::ALL
                .into_iter()
                .map(|entry| NavLink {
                    label: entry.label(),
                    href: entry.href(state.selected_index(), state.query()),
                    active: active == Some(entry),
                })
                .collect()
        };

        Snapshot {
            url: self.store.location().current().to_string(),
            route,
            epoch: self.store.epoch(),
            nav,
            state: state.clone(),
        }
    }
}
