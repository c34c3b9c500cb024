use serde::{Deserialize, Serialize};

/// A row of the user list demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub age: u8,
}

/// Display props of one user row
///
/// Two rows with equal props render identically, which is what change
/// detection compares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub selected: bool,
}

impl UserRow {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.age)
    }
}
