//! Runtime wiring for driving the dashboard core.
//!
//! A [`Session`] owns the store and the completion channel and plays the
//! role of the page's event loop: it observes the slots the current view
//! needs and applies completions in arrival order.

mod session;

pub use session::{NavLink, Session, Snapshot};
