//! The catalog store: a single owned aggregate of books, members, and the
//! borrow-history ledger.
//!
//! All operations are synchronous and all-or-nothing: every precondition is
//! checked before any field is mutated, so a domain error never leaves the
//! aggregate partially updated. Insertion order is preserved in all three
//! collections and in every query result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{Book, BorrowRecord, Member};

/// In-memory aggregate owning the whole library state.
///
/// Constructed at startup (from the data file or empty), passed explicitly
/// through the session, and written back with [`Catalog::save`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub books: Vec<Book>,

    #[serde(default)]
    pub members: Vec<Member>,

    /// Append-only ledger of every borrow event, open and closed.
    #[serde(default)]
    pub borrow_history: Vec<BorrowRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn find_book_by_id(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.book_id == book_id)
    }

    pub fn find_member_by_id(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.member_id == member_id)
    }

    // ------------------------------------------------------------------
    // Book and member registration
    // ------------------------------------------------------------------

    /// Add a book to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateBookId` if the ID is already taken; the collection
    /// is left unchanged.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        if self.find_book_by_id(&book.book_id).is_some() {
            return Err(CatalogError::DuplicateBookId(book.book_id));
        }
        self.books.push(book);
        Ok(())
    }

    /// Register a member.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMemberId` if the ID is already taken; the collection
    /// is left unchanged.
    pub fn add_member(&mut self, member: Member) -> Result<()> {
        if self.find_member_by_id(&member.member_id).is_some() {
            return Err(CatalogError::DuplicateMemberId(member.member_id));
        }
        self.members.push(member);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Circulation
    // ------------------------------------------------------------------

    /// Issue a book to a member on the given calendar date.
    ///
    /// On success the book is marked unavailable, the loan is appended to the
    /// member's outstanding list, and an open record is appended to the
    /// history ledger. The three updates are applied as one unit.
    ///
    /// # Errors
    ///
    /// `MemberNotFound` / `BookNotFound` if either party is missing, or
    /// `AlreadyBorrowed` if the book is out on loan. No state changes on
    /// error.
    pub fn borrow_book(&mut self, member_id: &str, book_id: &str, on: NaiveDate) -> Result<()> {
        let member_idx = self
            .members
            .iter()
            .position(|m| m.member_id == member_id)
            .ok_or_else(|| CatalogError::MemberNotFound(member_id.to_string()))?;
        let book_idx = self
            .books
            .iter()
            .position(|b| b.book_id == book_id)
            .ok_or_else(|| CatalogError::BookNotFound(book_id.to_string()))?;

        if !self.books[book_idx].available {
            return Err(CatalogError::AlreadyBorrowed(book_id.to_string()));
        }

        self.books[book_idx].available = false;
        self.members[member_idx].add_borrowed_book(book_id, on);
        self.borrow_history
            .push(BorrowRecord::open(member_id, book_id, on));
        Ok(())
    }

    /// Take back a book from a member on the given calendar date.
    ///
    /// The member's outstanding list and the history ledger are always kept
    /// in sync: a successful return marks the book available, removes the
    /// member-side entry, and closes the most recently opened matching
    /// history record (newest-to-oldest scan).
    ///
    /// # Errors
    ///
    /// `MemberNotFound` / `BookNotFound` if either party is missing, or
    /// `NotBorrowed` if this member holds no outstanding loan for the book.
    /// No state changes on error.
    pub fn return_book(&mut self, member_id: &str, book_id: &str, on: NaiveDate) -> Result<()> {
        let member_idx = self
            .members
            .iter()
            .position(|m| m.member_id == member_id)
            .ok_or_else(|| CatalogError::MemberNotFound(member_id.to_string()))?;
        let book_idx = self
            .books
            .iter()
            .position(|b| b.book_id == book_id)
            .ok_or_else(|| CatalogError::BookNotFound(book_id.to_string()))?;

        if !self.members[member_idx].has_borrowed(book_id) {
            return Err(CatalogError::NotBorrowed {
                member_id: member_id.to_string(),
                book_id: book_id.to_string(),
            });
        }

        self.books[book_idx].available = true;
        self.members[member_idx].remove_borrowed_book(book_id)?;

        // The member-side entry is the gate; a matching open record can only
        // be missing if the data file was edited by hand, in which case the
        // ledger is left as found.
        if let Some(record) = self
            .borrow_history
            .iter_mut()
            .rev()
            .find(|r| r.member_id == member_id && r.book_id == book_id && r.is_open())
        {
            record.close(on);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries and reports
    // ------------------------------------------------------------------

    /// Search books by case-insensitive substring on title and/or author.
    /// Both filters AND together; an absent filter matches all.
    pub fn search_books(&self, title: Option<&str>, author: Option<&str>) -> Vec<&Book> {
        let title = title.map(str::to_lowercase);
        let author = author.map(str::to_lowercase);
        self.books
            .iter()
            .filter(|b| {
                title
                    .as_deref()
                    .map_or(true, |t| b.title.to_lowercase().contains(t))
                    && author
                        .as_deref()
                        .map_or(true, |a| b.author.to_lowercase().contains(a))
            })
            .collect()
    }

    /// Books in the given genre (case-insensitive exact match) that are
    /// currently available for loan.
    pub fn available_books_by_genre(&self, genre: &str) -> Vec<&Book> {
        let genre = genre.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.available && b.genre.to_lowercase() == genre)
            .collect()
    }

    /// Members with at least one outstanding loan.
    pub fn members_with_borrows(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| !m.borrowed_books.is_empty())
            .collect()
    }

    /// The genre with the most borrow events across the whole history,
    /// open and closed records alike.
    ///
    /// Each record's book_id resolves to the book's *current* genre; records
    /// whose book no longer resolves are skipped. Ties break toward the
    /// genre first encountered in the left-to-right history scan. Returns
    /// `None` when the history is empty (or nothing resolves).
    pub fn most_popular_genre(&self) -> Option<String> {
        // Vec tally keeps first-seen order, which makes the tie-break
        // deterministic.
        let mut tally: Vec<(&str, usize)> = Vec::new();
        for record in &self.borrow_history {
            if let Some(book) = self.find_book_by_id(&record.book_id) {
                match tally.iter_mut().find(|(genre, _)| *genre == book.genre) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((&book.genre, 1)),
                }
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (genre, count) in tally {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((genre, count));
            }
        }
        best.map(|(genre, _)| genre.to_string())
    }
}
