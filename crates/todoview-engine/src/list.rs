use std::collections::HashSet;
use std::sync::Arc;

use todoview_types::{Error, Result, Todo, TodoId};

/// Immutable todo collection
///
/// Every mutation returns a new list. Records are shared between the old
/// and the new list, so an edit to one record leaves the identity of all
/// other records (`Arc::ptr_eq`) intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    records: Vec<Arc<Todo>>,
    next_id: TodoId,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: TodoId::new(1),
        }
    }

    /// Build a list from existing records, keeping their order.
    ///
    /// The next assigned id follows the highest existing id.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Todo>,
    {
        let mut seen = HashSet::new();
        let mut list = Self::new();

        for todo in records {
            if !seen.insert(todo.id) {
                return Err(Error::DuplicateId(todo.id));
            }
            if todo.id >= list.next_id {
                list.next_id = todo.id.next().ok_or(Error::IdOverflow(todo.id))?;
            }
            list.records.push(Arc::new(todo));
        }

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Arc<Todo>] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.records.iter().map(|todo| todo.as_ref())
    }

    pub fn get(&self, id: TodoId) -> Option<&Arc<Todo>> {
        self.records.iter().find(|todo| todo.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Id the next `add` will assign
    pub fn next_id(&self) -> TodoId {
        self.next_id
    }

    pub fn add(&self, text: &str) -> Result<Self> {
        let text = normalize_text(text)?;
        let next_id = self.next_id.next().ok_or(Error::IdOverflow(self.next_id))?;
        let mut records = self.records.clone();
        records.push(Arc::new(Todo {
            id: self.next_id,
            text,
            completed: false,
        }));

        Ok(Self {
            records,
            next_id,
        })
    }

    pub fn edit(&self, id: TodoId, text: &str) -> Result<Self> {
        let text = normalize_text(text)?;
        let current = self.get(id).ok_or(Error::NotFound(id))?;
        self.replace(Todo {
            text,
            ..Todo::clone(current)
        })
    }

    pub fn toggle_completed(&self, id: TodoId) -> Result<Self> {
        let current = self.get(id).ok_or(Error::NotFound(id))?;
        self.replace(Todo {
            completed: !current.completed,
            ..Todo::clone(current)
        })
    }

    pub fn remove(&self, id: TodoId) -> Result<Self> {
        if !self.contains(id) {
            return Err(Error::NotFound(id));
        }

        Ok(Self {
            records: self
                .records
                .iter()
                .filter(|todo| todo.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        })
    }

    /// Swap in a whole record with the same id, sharing all other records.
    pub fn replace(&self, todo: Todo) -> Result<Self> {
        let position = self
            .records
            .iter()
            .position(|existing| existing.id == todo.id)
            .ok_or(Error::NotFound(todo.id))?;

        let mut records = self.records.clone();
        records[position] = Arc::new(todo);

        Ok(Self {
            records,
            next_id: self.next_id,
        })
    }
}

fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyText);
    }
    Ok(trimmed.to_string())
}
