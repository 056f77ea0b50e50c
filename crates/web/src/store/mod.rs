//! The dashboard store: single owner of the state and the location.
//!
//! Responsibilities:
//! - Hold the current [`State`] and apply [`Action`]s through [`reduce`].
//! - Perform the one side effect actions carry: mirroring `SetQuery` into
//!   the address bar.
//! - Number index selections with an epoch and drop fetch completions that
//!   were issued under an older one.
//!
//! Does NOT handle:
//! - Issuing network requests (see `fetch`).
//! - Deciding which resources a view needs (see `route`).
//!
//! Invariants:
//! - Every mutation goes through `dispatch`; the state is only readable from outside.
//! - The epoch increases by one on every `ChangeIndex`, including one that
//!   selects the index already selected.

mod action;
mod reducer;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use reducer::reduce;
pub use state::State;

use tracing::debug;
use url::Url;

use crate::query_sync::{Location, get_query, set_query};
use crate::route::Route;

/// A fetch result stamped with the epoch it was requested under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub epoch: u64,
    pub action: Action,
}

/// Owner of the dashboard state.
#[derive(Debug)]
pub struct Store<L> {
    state: State,
    location: L,
    epoch: u64,
}

impl<L: Location> Store<L> {
    /// Create the store for `index`, reading the query from `location`.
    pub fn new(index: impl Into<String>, location: L) -> Self {
        let state = State::new(index, get_query(&location));
        Self {
            state,
            location,
            epoch: 0,
        }
    }

    /// Create the store for the index selected by the location's path.
    pub fn from_location(location: L) -> Self {
        let route = Route::from_url(location.current());
        Self::new(route.index, location)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Current index-selection epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), epoch = self.epoch, "Dispatching action");

        match &action {
            Action::SetQuery(query) => {
                if set_query(&mut self.location, query) {
                    debug!("Query written to location");
                }
            }
            Action::ChangeIndex(_) => {
                self.epoch += 1;
            }
            _ => {}
        }

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action, &self.location);
    }

    /// Apply a fetch completion unless it belongs to an older epoch.
    ///
    /// Returns true when the completion was applied.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.epoch != self.epoch {
            debug!(
                action = completion.action.kind(),
                completion_epoch = completion.epoch,
                epoch = self.epoch,
                "Discarding stale completion"
            );
            return false;
        }
        self.dispatch(completion.action);
        true
    }

    /// Navigate to `url`, creating a history entry.
    ///
    /// Selecting a different index resets the state through `ChangeIndex`;
    /// staying on the same index, or opening a page outside any index, keeps
    /// loaded data and only re-reads the query.
    pub fn navigate(&mut self, url: Url) {
        let route = Route::from_url(&url);
        self.location.push(url);

        if route.is_index_scoped() && route.index != self.state.selected_index() {
            self.dispatch(Action::ChangeIndex(route.index));
        } else {
            let query = get_query(&self.location);
            if query != self.state.query() {
                self.dispatch(Action::SetQuery(query));
            }
        }
    }
}
