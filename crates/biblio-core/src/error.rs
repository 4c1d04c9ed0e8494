//! Error types for catalog operations.
//!
//! Domain errors signal a violated business invariant, not a crash; the CLI
//! layer reports them and returns to the menu. Only `CorruptState` at startup
//! is treated as fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A book with this ID is already in the catalog
    #[error("Book ID already exists: {0}")]
    DuplicateBookId(String),

    /// A member with this ID is already registered
    #[error("Member ID already exists: {0}")]
    DuplicateMemberId(String),

    /// No book with this ID
    #[error("Book does not exist: {0}")]
    BookNotFound(String),

    /// No member with this ID
    #[error("Member does not exist: {0}")]
    MemberNotFound(String),

    /// The book is out on loan
    #[error("Book is already borrowed: {0}")]
    AlreadyBorrowed(String),

    /// The member has no outstanding loan for this book
    #[error("Member {member_id} has not borrowed book {book_id}")]
    NotBorrowed { member_id: String, book_id: String },

    /// The data file exists but does not parse
    #[error("Corrupt data file {path}: {source}")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog could not be serialized for saving
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Filesystem error while loading or saving
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
