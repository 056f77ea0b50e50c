//! Remote resources tracked by the store, one per state slot.

use bitflags::bitflags;
use monocle_client::{Field, ProjectsResponse, SuggestionsResponse, UserGroupListResponse};

use crate::remote_data::RemoteData;
use crate::store::{Action, State};

bitflags! {
    /// A set of state slots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Slots: u8 {
        const SUGGESTIONS = 1 << 0;
        const FIELDS = 1 << 1;
        const USER_GROUPS = 1 << 2;
        const PROJECTS = 1 << 3;
    }
}

/// Binds a state slot to the action that fills it.
pub trait Resource: 'static {
    type Payload: Send + 'static;

    /// Flag identifying the slot.
    const SLOT: Slots;

    /// Name used in logs.
    const NAME: &'static str;

    fn slot(state: &State) -> &RemoteData<Self::Payload>;

    fn into_action(data: RemoteData<Self::Payload>) -> Action;
}

/// Query suggestions for the selected index.
#[derive(Debug)]
pub enum Suggestions {}

/// Searchable field metadata.
#[derive(Debug)]
pub enum Fields {}

/// User groups defined for the selected index.
#[derive(Debug)]
pub enum UserGroups {}

/// Project definitions for the selected index.
#[derive(Debug)]
pub enum Projects {}

impl Resource for Suggestions {
    type Payload = SuggestionsResponse;
    const SLOT: Slots = Slots::SUGGESTIONS;
    const NAME: &'static str = "suggestions";

    fn slot(state: &State) -> &RemoteData<Self::Payload> {
        state.suggestions()
    }

    fn into_action(data: RemoteData<Self::Payload>) -> Action {
        Action::FetchSuggestions(data)
    }
}

impl Resource for Fields {
    type Payload = Vec<Field>;
    const SLOT: Slots = Slots::FIELDS;
    const NAME: &'static str = "fields";

    fn slot(state: &State) -> &RemoteData<Self::Payload> {
        state.fields()
    }

    fn into_action(data: RemoteData<Self::Payload>) -> Action {
        Action::FetchFields(data)
    }
}

impl Resource for UserGroups {
    type Payload = UserGroupListResponse;
    const SLOT: Slots = Slots::USER_GROUPS;
    const NAME: &'static str = "user_groups";

    fn slot(state: &State) -> &RemoteData<Self::Payload> {
        state.user_groups()
    }

    fn into_action(data: RemoteData<Self::Payload>) -> Action {
        Action::FetchUserGroups(data)
    }
}

impl Resource for Projects {
    type Payload = ProjectsResponse;
    const SLOT: Slots = Slots::PROJECTS;
    const NAME: &'static str = "projects";

    fn slot(state: &State) -> &RemoteData<Self::Payload> {
        state.projects()
    }

    fn into_action(data: RemoteData<Self::Payload>) -> Action {
        Action::FetchProjects(data)
    }
}

impl Slots {
    /// Slots of `self` whose state slot already holds a result.
    pub fn settled_in(self, state: &State) -> Slots {
        let mut settled = Slots::empty();
        for (flag, done) in [
            (Slots::SUGGESTIONS, Suggestions::slot(state).is_settled()),
            (Slots::FIELDS, Fields::slot(state).is_settled()),
            (Slots::USER_GROUPS, UserGroups::slot(state).is_settled()),
            (Slots::PROJECTS, Projects::slot(state).is_settled()),
        ] {
            if done && self.contains(flag) {
                settled |= flag;
            }
        }
        settled
    }
}
