//! Domain records for the catalog.
//!
//! These types define the persisted data model: books, members, and the
//! borrow-history ledger. Calendar dates carry no time-of-day or timezone and
//! serialize as ISO `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A single catalogued title. One physical/logical copy per `book_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique key across the catalog
    pub book_id: String,

    pub title: String,

    pub author: String,

    /// Free-text genre label
    pub genre: String,

    /// False while the book is out on loan
    pub available: bool,
}

impl Book {
    /// Create a new book, available for loan.
    pub fn new(
        book_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            available: true,
        }
    }
}

/// An outstanding loan as seen from the member's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveBorrow {
    pub book_id: String,

    /// Calendar date the loan started
    pub borrowed_on: NaiveDate,
}

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique key across the membership roll
    pub member_id: String,

    pub name: String,

    pub age: u8,

    /// Contact phone number
    pub contact: String,

    /// Outstanding loans, oldest first. Mirrors the open records in the
    /// borrow-history ledger; a book_id appears at most once.
    #[serde(default)]
    pub borrowed_books: Vec<ActiveBorrow>,
}

impl Member {
    /// Create a new member with no outstanding loans.
    pub fn new(
        member_id: impl Into<String>,
        name: impl Into<String>,
        age: u8,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            age,
            contact: contact.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// Whether this member currently holds the given book.
    pub fn has_borrowed(&self, book_id: &str) -> bool {
        self.borrowed_books.iter().any(|b| b.book_id == book_id)
    }

    /// Record a new outstanding loan. The catalog guards against a member
    /// holding the same book_id twice.
    pub fn add_borrowed_book(&mut self, book_id: impl Into<String>, borrowed_on: NaiveDate) {
        self.borrowed_books.push(ActiveBorrow {
            book_id: book_id.into(),
            borrowed_on,
        });
    }

    /// Drop the outstanding loan for `book_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotBorrowed` if this member holds no loan for the book.
    pub fn remove_borrowed_book(&mut self, book_id: &str) -> Result<()> {
        let position = self
            .borrowed_books
            .iter()
            .position(|b| b.book_id == book_id)
            .ok_or_else(|| CatalogError::NotBorrowed {
                member_id: self.member_id.clone(),
                book_id: book_id.to_string(),
            })?;
        self.borrowed_books.remove(position);
        Ok(())
    }
}

/// A ledger entry in the borrow history. Created on every borrow and never
/// removed; `returned_on` is set exactly once when the matching return occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub member_id: String,

    pub book_id: String,

    pub borrowed_on: NaiveDate,

    /// None while the loan is outstanding
    pub returned_on: Option<NaiveDate>,
}

impl BorrowRecord {
    /// Open a new ledger entry for an outstanding loan.
    pub fn open(
        member_id: impl Into<String>,
        book_id: impl Into<String>,
        borrowed_on: NaiveDate,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            book_id: book_id.into(),
            borrowed_on,
            returned_on: None,
        }
    }

    /// Whether the loan is still outstanding.
    pub fn is_open(&self) -> bool {
        self.returned_on.is_none()
    }

    /// Close the entry with the return date.
    pub fn close(&mut self, returned_on: NaiveDate) {
        self.returned_on = Some(returned_on);
    }
}
