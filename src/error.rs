//! Error type shared by every fallible sequence operation.
//!
//! Operations validate their arguments before touching the collection, so
//! receiving any of these errors means the input is unchanged.

/// Errors produced by the sequence extension traits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// An index outside `[0, len)`.
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An insertion point outside `[0, len]`.
    #[error("insertion index {index} is out of range for a collection of length {len}")]
    InsertionOutOfRange { index: usize, len: usize },

    /// More distinct indexes were requested than the collection holds.
    #[error("cannot select {count} unique indexes from a collection of length {len}")]
    CountOutOfRange { count: usize, len: usize },

    /// A batch pop named the same position twice.
    #[error("index {index} was requested more than once")]
    DuplicateIndex { index: usize },

    /// The operation needs at least one element.
    #[error("cannot use {operation} on an empty collection")]
    Empty { operation: &'static str },

    /// The item, rendered with `Debug`, is not in the collection.
    #[error("item {item} was not found in the collection")]
    ItemNotFound { item: String },

    /// No element satisfies the predicate.
    #[error("no item in the collection matches the predicate")]
    NoMatch,

    /// An exactly-one operation found zero or several matches.
    #[error("expected exactly one match but found {found}")]
    NotSingle { found: usize },

    /// Two elements (or their selected keys) differ.
    #[error("non-duplicate values were found in the collection")]
    NotUniform,

    /// A caller-supplied message replacing the default one.
    #[error("{0}")]
    Custom(String),
}

impl SeqError {
    pub(crate) fn item_not_found<T: std::fmt::Debug + ?Sized>(item: &T) -> Self {
        SeqError::ItemNotFound {
            item: format!("{item:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SeqError> = std::result::Result<T, E>;
