use owo_colors::OwoColorize;
use serde::Serialize;
use todoview_engine::{AppState, EditDraft, TodoId, UserRow, ViewParams, ViewResult};

use super::renderer::PlainView;

/// Envelope for every command result; JSON output is `{"content": ...}`
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

/// One page of todos plus the parameters that produced it
#[derive(Debug, Clone, Serialize)]
pub struct TodoPageViewModel {
    #[serde(flatten)]
    pub view: ViewResult,
    pub page_size: usize,
    pub search: String,
    pub status: String,
    pub sort: String,
    pub selected: Option<TodoId>,
    pub editing: Option<EditDraft>,
}

impl TodoPageViewModel {
    pub fn new(state: &AppState, params: &ViewParams, view: ViewResult) -> Self {
        Self {
            view,
            page_size: params.page_size.get(),
            search: params.search.clone(),
            status: params.status.to_string(),
            sort: params.sort.to_string(),
            selected: state.selected,
            editing: state.editing.clone(),
        }
    }
}

impl PlainView for TodoPageViewModel {
    fn render_plain(&self, color: bool) -> String {
        let mut out = String::new();

        if self.view.items.is_empty() {
            let msg = "No todos to display";
            if color {
                out.push_str(&format!("{}\n", msg.bright_black()));
            } else {
                out.push_str(msg);
                out.push('\n');
            }
        }

        for todo in &self.view.items {
            let check = if todo.completed { "x" } else { " " };
            let text = match &self.editing {
                Some(draft) if draft.id == todo.id => format!("{} (editing)", draft.text),
                _ => todo.text.clone(),
            };
            let line = format!("[{}] #{:<4} {}", check, todo.id.get(), text);
            let line = if color && todo.completed {
                line.bright_black().to_string()
            } else {
                line
            };
            out.push_str(&line);

            if self.selected == Some(todo.id) {
                if color {
                    out.push_str(&format!(" {}", "(selected)".cyan()));
                } else {
                    out.push_str(" (selected)");
                }
            }
            out.push('\n');
        }

        let mut footer = format!(
            "Page {}/{} - {} matching (status: {}, sort: {}",
            self.view.page, self.view.total_pages, self.view.total_items, self.status, self.sort
        );
        if !self.search.is_empty() {
            footer.push_str(&format!(", search: \"{}\"", self.search));
        }
        footer.push(')');

        out.push('\n');
        if color {
            out.push_str(&format!("{}\n", footer.dimmed()));
        } else {
            out.push_str(&footer);
            out.push('\n');
        }
        out
    }
}

/// Result of replaying a script without rendering a page
#[derive(Debug, Clone, Serialize)]
pub struct ScriptCheckViewModel {
    pub actions: usize,
    pub todos: usize,
    pub completed: usize,
}

impl PlainView for ScriptCheckViewModel {
    fn render_plain(&self, color: bool) -> String {
        let status = if color {
            "Script OK".green().bold().to_string()
        } else {
            "Script OK".to_string()
        };
        format!(
            "{}: {} actions applied, {} todos ({} completed)\n",
            status, self.actions, self.todos, self.completed
        )
    }
}

/// Users sorted by age
#[derive(Debug, Clone, Serialize)]
pub struct UserListViewModel {
    pub users: Vec<UserRow>,
    pub total: usize,
    pub selected: Option<u32>,
}

impl PlainView for UserListViewModel {
    fn render_plain(&self, color: bool) -> String {
        let mut out = String::new();
        for row in &self.users {
            out.push_str(&row.label());
            if row.selected {
                if color {
                    out.push_str(&format!(" {}", "(selected)".cyan()));
                } else {
                    out.push_str(" (selected)");
                }
            }
            out.push('\n');
        }

        let footer = format!(
            "Showing {} of {} users sorted by age",
            self.users.len(),
            self.total
        );
        out.push('\n');
        if color {
            out.push_str(&format!("{}\n", footer.dimmed()));
        } else {
            out.push_str(&footer);
            out.push('\n');
        }
        out
    }
}

/// Rows whose props change when the selection moves
#[derive(Debug, Clone, Serialize)]
pub struct RowChangesViewModel {
    pub from: Option<u32>,
    pub to: u32,
    pub changed: Vec<u32>,
}

impl PlainView for RowChangesViewModel {
    fn render_plain(&self, _color: bool) -> String {
        let from = self
            .from
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string());

        if self.changed.is_empty() {
            return format!("Selection {} -> {}: nothing to re-render\n", from, self.to);
        }

        let ids: Vec<String> = self.changed.iter().map(|id| id.to_string()).collect();
        format!(
            "Selection {} -> {}: re-render rows {}\n",
            from,
            self.to,
            ids.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoview_engine::{Action, PageSize, SortKey};

    fn sample_state() -> AppState {
        AppState::new()
            .reduce_all([
                Action::Add {
                    text: "Buy milk".to_string(),
                },
                Action::Add {
                    text: "apple".to_string(),
                },
                Action::Add {
                    text: "Milk the cow".to_string(),
                },
                Action::ToggleCompleted { id: TodoId::new(1) },
                Action::Select { id: TodoId::new(3) },
            ])
            .unwrap()
    }

    #[test]
    fn test_todo_page_plain() {
        let state = sample_state()
            .reduce(Action::SetSearch {
                search: "milk".to_string(),
            })
            .unwrap();
        let model = TodoPageViewModel::new(&state, &state.params, state.view());

        insta::assert_snapshot!(model.render_plain(false), @r#"
        [ ] #3    Milk the cow (selected)
        [x] #1    Buy milk

        Page 1/1 - 2 matching (status: all, sort: newest_first, search: "milk")
        "#);
    }

    #[test]
    fn test_todo_page_plain_shows_draft() {
        let state = sample_state()
            .reduce(Action::SetSort {
                sort: SortKey::TextAscending,
            })
            .unwrap()
            .reduce(Action::StartEdit { id: TodoId::new(2) })
            .unwrap()
            .reduce(Action::UpdateDraft {
                text: "green apple".to_string(),
            })
            .unwrap();
        let model = TodoPageViewModel::new(&state, &state.params, state.view());

        insta::assert_snapshot!(model.render_plain(false), @r"
        [ ] #2    green apple (editing)
        [x] #1    Buy milk
        [ ] #3    Milk the cow (selected)

        Page 1/1 - 3 matching (status: all, sort: text_ascending)
        ");
    }

    #[test]
    fn test_empty_page_plain() {
        let state = sample_state();
        let params = state
            .params
            .clone()
            .with_page_size(PageSize::new(2).unwrap())
            .with_page(todoview_engine::PageNumber::new(5).unwrap());
        let view = todoview_engine::compute_view(state.todos.records(), &params);
        let model = TodoPageViewModel::new(&state, &params, view);

        let plain = model.render_plain(false);
        assert!(plain.starts_with("No todos to display\n"));
        assert!(plain.contains("Page 5/2 - 3 matching"));
    }

    #[test]
    fn test_todo_page_json_is_flat() {
        let state = sample_state();
        let model = TodoPageViewModel::new(&state, &state.params, state.view());
        let json = serde_json::to_value(CommandResultViewModel::new(model)).unwrap();

        assert_eq!(json["content"]["total_pages"], 1);
        assert_eq!(json["content"]["items"][0]["id"], 3);
        assert_eq!(json["content"]["selected"], 3);
        assert_eq!(json["content"]["sort"], "newest_first");
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_row_changes_plain() {
        let model = RowChangesViewModel {
            from: Some(10),
            to: 20,
            changed: vec![20, 10],
        };
        assert_eq!(
            model.render_plain(false),
            "Selection 10 -> 20: re-render rows 20, 10\n"
        );

        let model = RowChangesViewModel {
            from: None,
            to: 4,
            changed: vec![],
        };
        assert_eq!(
            model.render_plain(false),
            "Selection none -> 4: nothing to re-render\n"
        );
    }

    #[test]
    fn test_user_list_plain() {
        let model = UserListViewModel {
            users: vec![
                UserRow {
                    id: 2,
                    name: "User 2".to_string(),
                    age: 18,
                    selected: false,
                },
                UserRow {
                    id: 1,
                    name: "User 1".to_string(),
                    age: 30,
                    selected: true,
                },
            ],
            total: 1000,
            selected: Some(1),
        };

        insta::assert_snapshot!(model.render_plain(false), @r"
        User 2 - 18
        User 1 - 30 (selected)

        Showing 2 of 1000 users sorted by age
        ");
    }
}
