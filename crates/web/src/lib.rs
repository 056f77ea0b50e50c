//! Monocle dashboard core.
//!
//! The state and remote-data synchronization layer of the dashboard: a
//! [`Store`](store::Store) updated only through [`Action`](store::Action)s,
//! a [`FetchCoordinator`](fetch::FetchCoordinator) that loads each remote
//! resource once per index selection, the `q` search parameter binding in
//! [`query_sync`], and path routing in [`route`].

pub mod cli;
pub mod fetch;
pub mod query_sync;
pub mod remote_data;
pub mod route;
pub mod runtime;
pub mod store;

pub use fetch::{FetchCoordinator, SearchApi, Slots};
pub use query_sync::{Location, MemoryLocation};
pub use remote_data::RemoteData;
pub use route::{NavEntry, Route, View};
pub use runtime::{Session, Snapshot};
pub use store::{Action, Completion, State, Store};
