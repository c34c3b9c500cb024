//! Todo app state as an explicit `State x Action -> State` transition.
//!
//! `AppState::reduce` never mutates the receiver: it returns the next state
//! or an error, leaving the previous state valid either way. The derived view
//! is a read-only projection of `todos` and `params`.

use serde::{Deserialize, Serialize};
use todoview_types::{
    Error, PageNumber, PageSize, Result, SortKey, StatusFilter, TodoId, ViewParams, ViewResult,
};
use tracing::debug;

use crate::list::TodoList;
use crate::view::compute_view;

/// User intent applied to [`AppState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Add { text: String },
    Edit { id: TodoId, text: String },
    ToggleCompleted { id: TodoId },
    Remove { id: TodoId },

    StartEdit { id: TodoId },
    UpdateDraft { text: String },
    CommitEdit,
    CancelEdit,

    Select { id: TodoId },
    ClearSelection,

    SetSearch { search: String },
    SetStatus { status: StatusFilter },
    SetSort { sort: SortKey },
    SetPageSize { page_size: PageSize },
    GoToPage { page: PageNumber },
    NextPage,
    PrevPage,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Edit { .. } => "edit",
            Action::ToggleCompleted { .. } => "toggle_completed",
            Action::Remove { .. } => "remove",
            Action::StartEdit { .. } => "start_edit",
            Action::UpdateDraft { .. } => "update_draft",
            Action::CommitEdit => "commit_edit",
            Action::CancelEdit => "cancel_edit",
            Action::Select { .. } => "select",
            Action::ClearSelection => "clear_selection",
            Action::SetSearch { .. } => "set_search",
            Action::SetStatus { .. } => "set_status",
            Action::SetSort { .. } => "set_sort",
            Action::SetPageSize { .. } => "set_page_size",
            Action::GoToPage { .. } => "go_to_page",
            Action::NextPage => "next_page",
            Action::PrevPage => "prev_page",
        }
    }
}

/// Inline edit in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    pub id: TodoId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub todos: TodoList,
    pub params: ViewParams,
    pub editing: Option<EditDraft>,
    pub selected: Option<TodoId>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: ViewParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_todos(mut self, todos: TodoList) -> Self {
        self.todos = todos;
        self
    }

    /// Current page of the derived view
    pub fn view(&self) -> ViewResult {
        compute_view(self.todos.records(), &self.params)
    }

    /// Apply one action, producing the next state.
    ///
    /// The page number is clamped to the last page after every action, so
    /// removing the only record of the last page moves back one page.
    pub fn reduce(&self, action: Action) -> Result<AppState> {
        debug!(action = action.name(), "reduce");

        let mut next = self.clone();
        match action {
            Action::Add { text } => {
                next.todos = self.todos.add(&text)?;
            }
            Action::Edit { id, text } => {
                next.todos = self.todos.edit(id, &text)?;
            }
            Action::ToggleCompleted { id } => {
                next.todos = self.todos.toggle_completed(id)?;
            }
            Action::Remove { id } => {
                next.todos = self.todos.remove(id)?;
                if next.editing.as_ref().is_some_and(|draft| draft.id == id) {
                    next.editing = None;
                }
                if next.selected == Some(id) {
                    next.selected = None;
                }
            }

            Action::StartEdit { id } => {
                let todo = self.todos.get(id).ok_or(Error::NotFound(id))?;
                next.editing = Some(EditDraft {
                    id,
                    text: todo.text.clone(),
                });
            }
            Action::UpdateDraft { text } => {
                let draft = next.editing.as_mut().ok_or_else(no_draft)?;
                draft.text = text;
            }
            Action::CommitEdit => {
                let draft = self.editing.as_ref().ok_or_else(no_draft)?;
                next.todos = self.todos.edit(draft.id, &draft.text)?;
                next.editing = None;
            }
            Action::CancelEdit => {
                next.editing = None;
            }

            Action::Select { id } => {
                if !self.todos.contains(id) {
                    return Err(Error::NotFound(id));
                }
                next.selected = Some(id);
            }
            Action::ClearSelection => {
                next.selected = None;
            }

            Action::SetSearch { search } => {
                next.params.search = search;
                next.params.page = PageNumber::FIRST;
            }
            Action::SetStatus { status } => {
                next.params.status = status;
                next.params.page = PageNumber::FIRST;
            }
            Action::SetSort { sort } => {
                next.params.sort = sort;
                next.params.page = PageNumber::FIRST;
            }
            Action::SetPageSize { page_size } => {
                next.params.page_size = page_size;
                next.params.page = PageNumber::FIRST;
            }
            Action::GoToPage { page } => {
                next.params.page = page;
            }
            Action::NextPage => {
                next.params.page = self.params.page.next();
            }
            Action::PrevPage => {
                next.params.page = self.params.page.prev();
            }
        }

        next.clamp_page();
        Ok(next)
    }

    /// Apply actions in order, stopping at the first failure.
    pub fn reduce_all<I>(&self, actions: I) -> Result<AppState>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .try_fold(self.clone(), |state, action| state.reduce(action))
    }

    fn clamp_page(&mut self) {
        let total_pages = self.view_total_pages();
        self.params.page = self.params.page.clamp_to(total_pages);
    }

    fn view_total_pages(&self) -> usize {
        let matching = self
            .todos
            .iter()
            .filter(|todo| crate::view::matches(todo, &self.params))
            .count();
        self.params.total_pages(matching)
    }
}

fn no_draft() -> Error {
    Error::InvalidAction("no edit in progress".to_string())
}
