use monocle_client::{Field, FieldType, GroupDefinition, UserGroupListResponse};

use super::*;
use crate::query_sync::{Location, MemoryLocation};
use crate::remote_data::RemoteData;

fn location(url: &str) -> MemoryLocation {
    MemoryLocation::parse(url).unwrap()
}

fn field(name: &str) -> Field {
    Field {
        name: name.to_string(),
        description: String::new(),
        field_type: FieldType::Text,
    }
}

fn groups() -> UserGroupListResponse {
    UserGroupListResponse {
        items: vec![GroupDefinition {
            name: "core".to_string(),
            members: 3,
        }],
    }
}

#[test]
fn test_initial_state_reads_query_from_location() {
    let store = Store::new("proj1", location("http://localhost/proj1?q=author%3Ame"));
    assert_eq!(store.state().selected_index(), "proj1");
    assert_eq!(store.state().query(), "author:me");
    assert!(store.state().suggestions().is_unrequested());
    assert!(store.state().fields().is_unrequested());
    assert!(store.state().user_groups().is_unrequested());
    assert!(store.state().projects().is_unrequested());
    assert_eq!(store.epoch(), 0);
}

#[test]
fn test_from_location_takes_index_from_path() {
    let store = Store::from_location(location("http://localhost/proj2/repos"));
    assert_eq!(store.state().selected_index(), "proj2");
    assert_eq!(store.state().query(), "");
}

#[test]
fn test_fetch_fields_success_fills_only_fields() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    let fields = vec![field("f1"), field("f2")];

    store.dispatch(Action::FetchFields(RemoteData::Success(fields.clone())));

    assert_eq!(store.state().fields(), &RemoteData::Success(fields));
    assert_eq!(store.state().selected_index(), "proj1");
    assert_eq!(store.state().query(), "");
    assert!(store.state().suggestions().is_unrequested());
    assert!(store.state().user_groups().is_unrequested());
    assert!(store.state().projects().is_unrequested());
}

#[test]
fn test_failure_is_stored_in_its_slot() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::FetchUserGroups(RemoteData::Failure(
        "Network error".to_string(),
    )));
    assert_eq!(store.state().user_groups().failure(), Some("Network error"));
    assert!(store.state().fields().is_unrequested());
}

#[test]
fn test_set_query_updates_state_and_replaces_url_once() {
    let mut store = Store::new("proj1", location("http://localhost/proj1/changes?tab=2"));

    store.dispatch(Action::SetQuery("state:open".to_string()));

    assert_eq!(store.state().query(), "state:open");
    assert_eq!(store.location().replacements(), 1);
    assert_eq!(store.location().history_len(), 1);
    assert_eq!(store.location().current().path(), "/proj1/changes");
    assert_eq!(
        store.location().current().query(),
        Some("tab=2&q=state%3Aopen")
    );
}

#[test]
fn test_set_query_same_value_does_not_write() {
    let mut store = Store::new("proj1", location("http://localhost/proj1?q=a"));
    store.dispatch(Action::SetQuery("a".to_string()));
    assert_eq!(store.location().replacements(), 0);
    assert_eq!(store.state().query(), "a");
}

#[test]
fn test_set_query_keeps_loaded_slots() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::FetchUserGroups(RemoteData::Success(groups())));
    store.dispatch(Action::SetQuery("x".to_string()));
    assert_eq!(store.state().user_groups(), &RemoteData::Success(groups()));
    assert_eq!(store.epoch(), 0);
}

#[test]
fn test_change_index_after_set_query_rereads_url() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::FetchFields(RemoteData::Success(vec![field("f1")])));
    store.dispatch(Action::SetQuery("state:open".to_string()));

    store.dispatch(Action::ChangeIndex("proj2".to_string()));

    assert_eq!(store.state().selected_index(), "proj2");
    assert_eq!(store.state().query(), get_query(store.location()));
    assert_eq!(store.state().query(), "state:open");
    assert!(store.state().fields().is_unrequested());
    assert!(store.state().suggestions().is_unrequested());
    assert!(store.state().user_groups().is_unrequested());
    assert!(store.state().projects().is_unrequested());
}

#[test]
fn test_change_index_bumps_epoch_even_for_same_index() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::ChangeIndex("proj1".to_string()));
    store.dispatch(Action::ChangeIndex("proj1".to_string()));
    assert_eq!(store.epoch(), 2);
}

#[test]
fn test_stale_completion_is_dropped() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    let stale = Completion {
        epoch: store.epoch(),
        action: Action::FetchFields(RemoteData::Success(vec![field("old")])),
    };

    store.dispatch(Action::ChangeIndex("proj2".to_string()));

    assert!(!store.complete(stale));
    assert!(store.state().fields().is_unrequested());

    let fresh = Completion {
        epoch: store.epoch(),
        action: Action::FetchFields(RemoteData::Success(vec![field("new")])),
    };
    assert!(store.complete(fresh));
    assert_eq!(
        store.state().fields().success().map(|f| f[0].name.as_str()),
        Some("new")
    );
}

#[test]
fn test_navigate_to_other_index_resets_state() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::FetchFields(RemoteData::Success(vec![field("f1")])));

    store.navigate(url::Url::parse("http://localhost/proj2/changes?q=a").unwrap());

    assert_eq!(store.state().selected_index(), "proj2");
    assert_eq!(store.state().query(), "a");
    assert!(store.state().fields().is_unrequested());
    assert_eq!(store.location().history_len(), 2);
    assert_eq!(store.epoch(), 1);
}

#[test]
fn test_navigate_within_index_keeps_data() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::FetchFields(RemoteData::Success(vec![field("f1")])));

    store.navigate(url::Url::parse("http://localhost/proj1/repos?q=b").unwrap());

    assert_eq!(store.state().query(), "b");
    assert!(store.state().fields().is_settled());
    assert_eq!(store.epoch(), 0);
    // The pushed URL already holds the query.
    assert_eq!(store.location().replacements(), 0);
}

#[test]
fn test_navigate_to_search_help_keeps_index_and_data() {
    let mut store = Store::new("proj1", location("http://localhost/proj1"));
    store.dispatch(Action::FetchFields(RemoteData::Success(vec![field("f1")])));

    store.navigate(url::Url::parse("http://localhost/help/search?q=a").unwrap());

    assert_eq!(store.state().selected_index(), "proj1");
    assert_eq!(store.state().query(), "a");
    assert!(store.state().fields().is_settled());
    assert_eq!(store.epoch(), 0);
}

#[test]
fn test_store_opened_on_search_help_has_no_index() {
    let store = Store::from_location(location("http://localhost/help/search?q=a"));
    assert_eq!(store.state().selected_index(), "");
    assert_eq!(store.state().query(), "a");
}

#[test]
fn test_reduce_fetch_actions_touch_one_slot() {
    let loc = location("http://localhost/proj1");
    let base = State::new("proj1", "q1");

    let next = reduce(
        base.clone(),
        Action::FetchSuggestions(RemoteData::Failure("HTTP 500".to_string())),
        &loc,
    );
    assert_eq!(next.suggestions().failure(), Some("HTTP 500"));
    assert_eq!(next.fields(), base.fields());
    assert_eq!(next.user_groups(), base.user_groups());
    assert_eq!(next.projects(), base.projects());
    assert_eq!(next.query(), "q1");
}

#[test]
fn test_reduce_set_query_does_not_touch_location() {
    let loc = location("http://localhost/proj1?q=old");
    let next = reduce(State::new("proj1", "old"), Action::SetQuery("new".into()), &loc);
    assert_eq!(next.query(), "new");
    assert_eq!(loc.current().query(), Some("q=old"));
    assert_eq!(loc.replacements(), 0);
}

#[test]
fn test_action_kind_and_fetch_result() {
    assert_eq!(Action::ChangeIndex("a".into()).kind(), "ChangeIndex");
    assert!(!Action::SetQuery(String::new()).is_fetch_result());
    assert!(Action::FetchProjects(RemoteData::Unrequested).is_fetch_result());
}
