//! Action scripts: TOML files that seed records and replay actions.
//!
//! ```toml
//! [[todos]]
//! id = 10
//! text = "Seeded record"
//!
//! [[actions]]
//! type = "add"
//! text = "Buy milk"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use todoview_engine::{Action, AppState, Todo, TodoList, ViewParams};
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionScript {
    /// Records present before the first action
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl ActionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read action script: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid action script: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Seed the collection and apply every action in order.
    pub fn replay(self, params: ViewParams) -> Result<AppState> {
        let todos = TodoList::from_records(self.todos).context("Invalid seeded todos")?;
        let initial = AppState::new().with_todos(todos).with_params(params);
        replay_actions(initial, self.actions)
    }
}

/// Apply actions one by one, naming the failing action in the error.
pub fn replay_actions<I>(state: AppState, actions: I) -> Result<AppState>
where
    I: IntoIterator<Item = Action>,
{
    let mut state = state;
    for (index, action) in actions.into_iter().enumerate() {
        let name = action.name();
        state = state
            .reduce(action)
            .with_context(|| format!("Action #{} ({}) failed", index + 1, name))?;
    }
    debug!(todos = state.todos.len(), "replayed actions");
    Ok(state)
}
