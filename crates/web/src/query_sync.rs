//! Address bar abstraction and the `q` search parameter binding.
//!
//! Responsibilities:
//! - Model the browser location as a trait with replace/push semantics.
//! - Read the current search query from the `q` parameter.
//! - Rewrite the `q` parameter in place without adding a history entry.
//!
//! Does NOT handle:
//! - Deciding when the query changes (the store does that on `SetQuery`).
//! - Path routing (see `route`).
//!
//! Invariants:
//! - A malformed `q` (bad percent-encoding, non UTF-8) reads as "".
//! - `set_query` never changes the path, other parameters, or history length.
//! - `set_query` with the value already present performs no write.

use percent_encoding::percent_decode_str;
use url::Url;

/// Name of the search parameter holding the query.
pub const QUERY_PARAM: &str = "q";

/// A browser-like location: a current URL plus a navigation history.
pub trait Location {
    /// The URL currently shown in the address bar.
    fn current(&self) -> &Url;

    /// Replace the current URL without creating a history entry.
    fn replace(&mut self, url: Url);

    /// Navigate to a new URL, creating a history entry.
    fn push(&mut self, url: Url);
}

/// In-process location used by the headless runner and tests.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    current: Url,
    history: Vec<Url>,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        Self {
            current: url,
            history: Vec::new(),
            replacements: 0,
        }
    }

    /// Parse `url` and start a location there.
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Url::parse(url).map(Self::new)
    }

    /// Number of entries in the navigation history, including the current one.
    pub fn history_len(&self) -> usize {
        self.history.len() + 1
    }

    /// Number of in-place URL replacements performed so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Go back one history entry. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> &Url {
        &self.current
    }

    fn replace(&mut self, url: Url) {
        self.current = url;
        self.replacements += 1;
    }

    fn push(&mut self, url: Url) {
        let previous = std::mem::replace(&mut self.current, url);
        self.history.push(previous);
    }
}

/// Decode one `application/x-www-form-urlencoded` component strictly.
fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Raw (still encoded) value of the `q` parameter, if present.
fn raw_query_value(url: &Url) -> Option<&str> {
    url.query()?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(key).as_deref() == Some(QUERY_PARAM)).then_some(value)
    })
}

/// Read the query from the `q` parameter of `url`.
pub fn query_from_url(url: &Url) -> String {
    raw_query_value(url)
        .and_then(decode_component)
        .unwrap_or_default()
}

/// Read the query from the current location.
pub fn get_query<L: Location + ?Sized>(location: &L) -> String {
    query_from_url(location.current())
}

/// Write `query` into the `q` parameter of the current location in place.
///
/// Returns true when the URL was rewritten.
pub fn set_query<L: Location + ?Sized>(location: &mut L, query: &str) -> bool {
    let current = location.current();
    if raw_query_value(current).and_then(decode_component).as_deref() == Some(query) {
        return false;
    }

    let mut pairs: Vec<(String, String)> = current
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    match pairs.iter_mut().find(|(k, _)| k == QUERY_PARAM) {
        Some(pair) => pair.1 = query.to_string(),
        None => pairs.push((QUERY_PARAM.to_string(), query.to_string())),
    }
    // A second `q` would shadow nothing on read but confuse reloads.
    let mut seen = false;
    pairs.retain(|(k, _)| {
        if k != QUERY_PARAM {
            return true;
        }
        let keep = !seen;
        seen = true;
        keep
    });

    let mut next = current.clone();
    next.query_pairs_mut().clear().extend_pairs(pairs);
    location.replace(next);
    true
}
