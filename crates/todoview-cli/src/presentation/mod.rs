pub mod renderer;
pub mod view_models;

pub use renderer::{ConsoleRenderer, PlainView};
pub use view_models::{
    CommandResultViewModel, Guidance, RowChangesViewModel, ScriptCheckViewModel,
    TodoPageViewModel, UserListViewModel,
};
