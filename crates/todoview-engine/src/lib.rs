// Engine module - derived view computation and state transitions
// This layer sits between domain types and whatever host drives it (CLI, UI)

pub mod collate;
pub mod list;
pub mod state;
pub mod toggle;
pub mod users;
mod view;

pub use collate::collate;
pub use list::TodoList;
pub use state::{Action, AppState, EditDraft};
pub use toggle::Toggle;
pub use users::{UserList, changed_rows, generate_users, project_rows, sort_by_age};
pub use view::{compute_view, matches};

// Re-export domain types so hosts only need the engine crate
pub use todoview_types::{
    Error, PageNumber, PageSize, Result, SortKey, StatusFilter, Todo, TodoId, User, UserRow,
    ViewParams, ViewResult,
};
