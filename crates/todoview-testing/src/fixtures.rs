//! Sample action scripts shared by integration tests.

/// Three groceries, the second one completed.
pub const GROCERIES: &str = r#"
[[actions]]
type = "add"
text = "Buy milk"

[[actions]]
type = "add"
text = "apple"

[[actions]]
type = "add"
text = "Bake bread"

[[actions]]
type = "toggle_completed"
id = 2
"#;

/// `count` records named "Task 01", "Task 02", ... in id order.
pub fn numbered_tasks(count: usize) -> String {
    (1..=count)
        .map(|i| format!("[[actions]]\ntype = \"add\"\ntext = \"Task {:02}\"\n", i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Edit of record 1 through the inline edit actions.
pub const INLINE_EDIT: &str = r#"
[[actions]]
type = "add"
text = "Buy milk"

[[actions]]
type = "add"
text = "apple"

[[actions]]
type = "start_edit"
id = 1

[[actions]]
type = "update_draft"
text = "Buy bread"

[[actions]]
type = "commit_edit"
"#;

/// Second action refers to a record that does not exist.
pub const BROKEN: &str = r#"
[[actions]]
type = "add"
text = "Buy milk"

[[actions]]
type = "remove"
id = 42
"#;
