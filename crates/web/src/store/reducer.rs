//! Pure reducer function for state transitions.
//!
//! The reducer never writes anywhere: the address bar update required by
//! `SetQuery` is performed by [`Store::dispatch`](super::Store::dispatch)
//! before the reducer runs. Its only outside read is the current query on
//! `ChangeIndex`, which builds a brand new state.

use super::action::Action;
use super::state::State;
use crate::query_sync::{Location, get_query};

/// Compute the state that follows `state` once `action` is applied.
pub fn reduce<L: Location + ?Sized>(state: State, action: Action, location: &L) -> State {
    match action {
        Action::ChangeIndex(index) => State::new(index, get_query(location)),
        Action::SetQuery(query) => State { query, ..state },
        Action::FetchFields(fields) => State { fields, ..state },
        Action::FetchSuggestions(suggestions) => State {
            suggestions,
            ..state
        },
        Action::FetchUserGroups(user_groups) => State {
            user_groups,
            ..state
        },
        Action::FetchProjects(projects) => State { projects, ..state },
    }
}
