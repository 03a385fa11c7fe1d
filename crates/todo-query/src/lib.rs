//! Todo Query
//!
//! Derives filtered, paginated views over an in-memory todo list.
//!
//! - models: Item, FilterSpec, PageState, ViewResult
//! - date: calendar-day normalization of user date input
//! - query: the pure `compute_view` function
//! - session: filter/page state machine around `compute_view`

pub mod date;
pub mod models;
pub mod query;
pub mod session;

pub use models::{FilterSpec, Item, PageState, ViewResult};
pub use query::compute_view;
pub use session::ViewSession;
