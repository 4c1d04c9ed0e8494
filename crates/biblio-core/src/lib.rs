//! # Biblio Core
//!
//! Core library for Biblio - a single-user library catalog manager.
//!
//! This crate provides the in-memory catalog aggregate (books, members,
//! borrow history), its domain operations, and the JSON persistence
//! round-trip, independent of the interactive CLI.
//!
//! ## Architecture
//!
//! - **model**: Book, Member, and BorrowRecord record types
//! - **catalog**: the catalog store and its operations
//! - **store**: whole-file JSON load/save
//! - **error**: domain error hierarchy
//!
//! The catalog is a single owned aggregate: constructed at startup from the
//! data file (or empty), passed explicitly through the session, and written
//! back after every mutation. There is no global state and no concurrency;
//! callers needing concurrent access must add their own synchronization.

pub mod catalog;
pub mod error;
pub mod fs;
pub mod model;
pub mod store;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use model::{ActiveBorrow, Book, BorrowRecord, Member};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
