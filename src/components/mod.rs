//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod new_todo_form;
mod pagination;
mod status_banner;
mod todo_list_view;
mod todo_row;

pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use pagination::Pagination;
pub use status_banner::StatusBanner;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
