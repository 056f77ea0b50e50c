//! URL path routing and navigation links.
//!
//! Responsibilities:
//! - Map path segments to the selected index and a [`View`].
//! - Tell which navigation entry a view activates and which remote
//!   resources it reads.
//! - Build navigation links that carry the current query.
//!
//! Invariants:
//! - Routing is total: any path yields a route, unknown shapes yield `View::NotFound`.
//! - The index is the first path segment, or "" for the root path and
//!   the search help page.

use serde::Serialize;
use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::fetch::Slots;
use crate::query_sync::QUERY_PARAM;

/// The page selected by a URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "param", rename_all = "snake_case")]
pub enum View {
    /// `/`: choose an index.
    IndexSelection,
    /// `/<index>`
    Activity,
    ActiveAuthors,
    PeersStrength,
    NewAuthors,
    UserGroups,
    /// `/<index>/user_groups/<group>`
    UserGroup(String),
    Repos,
    Changes,
    /// `/<index>/change/<id>`
    Change(String),
    Board,
    /// `/help/search`
    SearchHelp,
    NotFound,
}

impl View {
    /// Remote resources the view reads.
    ///
    /// Every page below an index shows the search bar, which needs the
    /// suggestions and the field list.
    pub fn required_slots(&self) -> Slots {
        let search_bar = Slots::SUGGESTIONS | Slots::FIELDS;
        match self {
            Self::IndexSelection | Self::NotFound => Slots::empty(),
            Self::SearchHelp => Slots::FIELDS,
            Self::UserGroups | Self::UserGroup(_) => search_bar | Slots::USER_GROUPS,
            Self::Repos => search_bar | Slots::PROJECTS,
            Self::Activity
            | Self::Board
            | Self::ActiveAuthors
            | Self::PeersStrength
            | Self::NewAuthors
            | Self::Changes
            | Self::Change(_) => search_bar,
        }
    }

    /// Navigation entry highlighted while the view is shown.
    pub fn nav_entry(&self) -> Option<NavEntry> {
        match self {
            Self::Activity => Some(NavEntry::Activity),
            Self::ActiveAuthors => Some(NavEntry::ActiveAuthors),
            Self::PeersStrength => Some(NavEntry::PeersStrength),
            Self::NewAuthors => Some(NavEntry::NewAuthors),
            Self::UserGroups | Self::UserGroup(_) => Some(NavEntry::UserGroups),
            Self::Repos => Some(NavEntry::Repos),
            Self::Changes | Self::Change(_) => Some(NavEntry::Changes),
            Self::Board => Some(NavEntry::Board),
            Self::SearchHelp => Some(NavEntry::SearchHelp),
            Self::IndexSelection | Self::NotFound => None,
        }
    }
}

/// The selected index and view for a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub index: String,
    pub view: View,
}

impl Route {
    /// Resolve a route from decoded path segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let segments: Vec<&str> = segments
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.is_empty())
            .collect();

        let view = match segments.as_slice() {
            [] => View::IndexSelection,
            // Not scoped to an index.
            ["help", "search"] => {
                return Self {
                    index: String::new(),
                    view: View::SearchHelp,
                };
            }
            [_] => View::Activity,
            [_, "active_authors"] => View::ActiveAuthors,
            [_, "peers_strength"] => View::PeersStrength,
            [_, "new_authors"] => View::NewAuthors,
            [_, "user_groups"] => View::UserGroups,
            [_, "user_groups", group] => View::UserGroup((*group).to_string()),
            [_, "repos"] => View::Repos,
            [_, "changes"] => View::Changes,
            [_, "change", id] => View::Change((*id).to_string()),
            [_, "board"] => View::Board,
            _ => View::NotFound,
        };

        let index = segments.first().copied().unwrap_or_default().to_string();
        Self { index, view }
    }

    /// True when the route belongs to an index rather than the whole dashboard.
    pub fn is_index_scoped(&self) -> bool {
        !matches!(self.view, View::SearchHelp)
    }

    /// Resolve a route from a URL's path.
    pub fn from_url(url: &Url) -> Self {
        let segments: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .map(|s| {
                        percent_encoding::percent_decode_str(s)
                            .decode_utf8_lossy()
                            .into_owned()
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self::from_segments(&segments)
    }

    /// Navigation entry highlighted for this route.
    pub fn active_entry(&self) -> Option<NavEntry> {
        self.view.nav_entry()
    }
}

/// An entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavEntry {
    Activity,
    Changes,
    ActiveAuthors,
    PeersStrength,
    NewAuthors,
    Repos,
    UserGroups,
    Board,
    SearchHelp,
}

impl NavEntry {
    /// Menu order.
    pub const ALL: [NavEntry; 9] = [
        NavEntry::Activity,
        NavEntry::Changes,
        NavEntry::ActiveAuthors,
        NavEntry::PeersStrength,
        NavEntry::NewAuthors,
        NavEntry::Repos,
        NavEntry::UserGroups,
        NavEntry::Board,
        NavEntry::SearchHelp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Activity => "Activity",
            Self::Changes => "Changes",
            Self::ActiveAuthors => "Active authors",
            Self::PeersStrength => "Peers strength",
            Self::NewAuthors => "New authors",
            Self::Repos => "Repositories",
            Self::UserGroups => "User groups",
            Self::Board => "Board",
            Self::SearchHelp => "Search help",
        }
    }

    /// Path suffix appended to `/<index>`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Activity => "",
            Self::Changes => "/changes",
            Self::ActiveAuthors => "/active_authors",
            Self::PeersStrength => "/peers_strength",
            Self::NewAuthors => "/new_authors",
            Self::Repos => "/repos",
            Self::UserGroups => "/user_groups",
            Self::Board => "/board",
            Self::SearchHelp => "",
        }
    }

    /// Link target for this entry.
    pub fn href(self, index: &str, query: &str) -> String {
        match self {
            // Help is not scoped to an index.
            Self::SearchHelp => with_query("/help/search".to_string(), query),
            _ => nav_link(index, self.suffix(), query),
        }
    }
}

/// Build `/<index><suffix>`, carrying `query` as `?q=` when non-empty.
pub fn nav_link(index: &str, suffix: &str, query: &str) -> String {
    with_query(format!("/{index}{suffix}"), query)
}

fn with_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        let encoded: String = byte_serialize(query.as_bytes()).collect();
        format!("{path}?{QUERY_PARAM}={encoded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &[&str]) -> Route {
        Route::from_segments(path)
    }

    #[test]
    fn test_empty_path_selects_no_index() {
        let r = route(&[]);
        assert_eq!(r.index, "");
        assert_eq!(r.view, View::IndexSelection);
        assert_eq!(r.active_entry(), None);
    }

    #[test]
    fn test_repos_route() {
        let r = route(&["proj1", "repos"]);
        assert_eq!(r.index, "proj1");
        assert_eq!(r.view, View::Repos);
        assert_eq!(r.active_entry(), Some(NavEntry::Repos));
    }

    #[test]
    fn test_unknown_sub_route_is_not_found() {
        let r = route(&["proj1", "bogus"]);
        assert_eq!(r.index, "proj1");
        assert_eq!(r.view, View::NotFound);
        assert_eq!(r.view.required_slots(), Slots::empty());
    }

    #[test]
    fn test_search_help_has_no_index() {
        let r = route(&["help", "search"]);
        assert_eq!(r.index, "");
        assert_eq!(r.view, View::SearchHelp);
        assert!(!r.is_index_scoped());
        assert!(route(&["proj1", "repos"]).is_index_scoped());
    }

    #[test]
    fn test_too_deep_is_not_found() {
        assert_eq!(route(&["proj1", "change", "42", "extra"]).view, View::NotFound);
        assert_eq!(route(&["proj1", "repos", "zuul"]).view, View::NotFound);
    }

    #[test]
    fn test_all_registered_shapes() {
        let cases: Vec<(Vec<&str>, View)> = vec![
            (vec!["proj1"], View::Activity),
            (vec!["proj1", "active_authors"], View::ActiveAuthors),
            (vec!["proj1", "peers_strength"], View::PeersStrength),
            (vec!["proj1", "new_authors"], View::NewAuthors),
            (vec!["proj1", "user_groups"], View::UserGroups),
            (
                vec!["proj1", "user_groups", "core"],
                View::UserGroup("core".to_string()),
            ),
            (vec!["proj1", "changes"], View::Changes),
            (vec!["proj1", "change", "123"], View::Change("123".to_string())),
            (vec!["proj1", "board"], View::Board),
            (vec!["help", "search"], View::SearchHelp),
        ];
        for (path, expected) in cases {
            assert_eq!(route(&path).view, expected, "path {:?}", path);
        }
    }

    #[test]
    fn test_from_url_ignores_trailing_slash_and_decodes() {
        let url = Url::parse("http://localhost/my%20index/user_groups/").unwrap();
        let r = Route::from_url(&url);
        assert_eq!(r.index, "my index");
        assert_eq!(r.view, View::UserGroups);

        let root = Url::parse("http://localhost/").unwrap();
        assert_eq!(Route::from_url(&root).view, View::IndexSelection);
    }

    #[test]
    fn test_nav_link_with_and_without_query() {
        assert_eq!(nav_link("proj1", "/repos", ""), "/proj1/repos");
        assert_eq!(
            nav_link("proj1", "/changes", "state:open"),
            "/proj1/changes?q=state%3Aopen"
        );
        assert_eq!(NavEntry::Activity.href("proj1", ""), "/proj1");
        assert_eq!(
            NavEntry::SearchHelp.href("proj1", "author:me"),
            "/help/search?q=author%3Ame"
        );
    }

    #[test]
    fn test_nav_entries_round_trip_through_routing() {
        for entry in NavEntry::ALL {
            let href = entry.href("proj1", "");
            let url = Url::parse(&format!("http://localhost{href}")).unwrap();
            assert_eq!(Route::from_url(&url).active_entry(), Some(entry), "{href}");
        }
    }

    #[test]
    fn test_required_slots() {
        assert_eq!(
            View::UserGroup("core".to_string()).required_slots(),
            Slots::SUGGESTIONS | Slots::FIELDS | Slots::USER_GROUPS
        );
        assert_eq!(View::SearchHelp.required_slots(), Slots::FIELDS);
        assert!(View::Repos.required_slots().contains(Slots::PROJECTS));
    }
}
