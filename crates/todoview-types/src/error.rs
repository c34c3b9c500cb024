use std::fmt;

use crate::TodoId;

/// Result type for todoview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building view parameters or
/// transforming a todo collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Page size must be a positive integer
    InvalidPageSize(usize),

    /// Page numbers start at 1
    InvalidPageNumber(usize),

    /// A name outside a closed set of variants (status filter, sort key)
    UnknownVariant { kind: &'static str, value: String },

    /// Todo text is empty after trimming
    EmptyText,

    /// Two records share the same id
    DuplicateId(TodoId),

    /// No record with the given id
    NotFound(TodoId),

    /// No id left to assign after the given one
    IdOverflow(TodoId),

    /// Action not valid in the current state
    InvalidAction(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPageSize(size) => {
                write!(f, "Invalid page size: {} (must be at least 1)", size)
            }
            Error::InvalidPageNumber(page) => {
                write!(f, "Invalid page number: {} (pages start at 1)", page)
            }
            Error::UnknownVariant { kind, value } => write!(f, "Unknown {}: '{}'", kind, value),
            Error::EmptyText => write!(f, "Todo text must not be empty"),
            Error::DuplicateId(id) => write!(f, "Duplicate todo id: {}", id),
            Error::NotFound(id) => write!(f, "Todo not found: {}", id),
            Error::IdOverflow(id) => write!(f, "No todo id available after {}", id),
            Error::InvalidAction(msg) => write!(f, "Invalid action: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
