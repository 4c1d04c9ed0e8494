//! The interactive menu loop.
//!
//! Nine actions over the catalog, looped until exit. Every mutating action
//! saves the catalog right after it succeeds, so the data file tracks the
//! in-memory state; domain errors are reported and the loop continues.

use std::path::Path;

use biblio_core::{Book, Catalog, Member};
use chrono::Local;

use crate::output;
use crate::prompt;
use crate::validation;

const MENU_TITLE: &str = "City Library Catalog";

const MENU_ITEMS: [&str; 9] = [
    "Add Book",
    "Add Member",
    "Borrow Book",
    "Return Book",
    "Search Books",
    "Available Books by Genre",
    "Members With Borrowed Books",
    "Most Popular Genre",
    "Save & Exit",
];

/// Run the menu loop until the user exits.
pub fn run(catalog: &mut Catalog, data_path: &Path) -> anyhow::Result<()> {
    loop {
        match prompt::menu_choice(MENU_TITLE, &MENU_ITEMS)? {
            0 => add_book(catalog, data_path)?,
            1 => add_member(catalog, data_path)?,
            2 => borrow_book(catalog, data_path)?,
            3 => return_book(catalog, data_path)?,
            4 => search_books(catalog)?,
            5 => available_by_genre(catalog)?,
            6 => members_with_borrows(catalog),
            7 => most_popular_genre(catalog),
            _ => {
                catalog.save(data_path)?;
                output::success("Catalog saved. Goodbye!");
                return Ok(());
            }
        }
    }
}

fn add_book(catalog: &mut Catalog, data_path: &Path) -> anyhow::Result<()> {
    let book_id = prompt::field("Book ID", validation::validate_book_id)?;
    let title = prompt::field("Title", validation::validate_title)?;
    let author = prompt::field("Author", validation::validate_author)?;
    let genre = prompt::field("Genre", validation::validate_genre)?;

    match catalog.add_book(Book::new(book_id, title, author, genre)) {
        Ok(()) => {
            catalog.save(data_path)?;
            output::success("Book added successfully.");
        }
        Err(err) => output::domain_error(&err),
    }
    Ok(())
}

fn add_member(catalog: &mut Catalog, data_path: &Path) -> anyhow::Result<()> {
    let member_id = prompt::field("Member ID", validation::validate_member_id)?;
    let name = prompt::field("Name", validation::validate_name)?;
    let age = prompt::field("Age", validation::validate_age)?;
    let age = validation::parse_age(&age).map_err(|reason| anyhow::anyhow!(reason))?;
    let contact = prompt::field("Contact", validation::validate_contact)?;

    match catalog.add_member(Member::new(member_id, name, age, contact)) {
        Ok(()) => {
            catalog.save(data_path)?;
            output::success("Member added successfully.");
        }
        Err(err) => output::domain_error(&err),
    }
    Ok(())
}

fn borrow_book(catalog: &mut Catalog, data_path: &Path) -> anyhow::Result<()> {
    let member_id = prompt::field("Member ID", validation::validate_member_id)?;
    let book_id = prompt::field("Book ID", validation::validate_book_id)?;

    let today = Local::now().date_naive();
    match catalog.borrow_book(&member_id, &book_id, today) {
        Ok(()) => {
            catalog.save(data_path)?;
            output::success("Book issued successfully.");
        }
        Err(err) => output::domain_error(&err),
    }
    Ok(())
}

fn return_book(catalog: &mut Catalog, data_path: &Path) -> anyhow::Result<()> {
    let member_id = prompt::field("Member ID", validation::validate_member_id)?;
    let book_id = prompt::field("Book ID", validation::validate_book_id)?;

    let today = Local::now().date_naive();
    match catalog.return_book(&member_id, &book_id, today) {
        Ok(()) => {
            catalog.save(data_path)?;
            output::success("Book returned successfully.");
        }
        Err(err) => output::domain_error(&err),
    }
    Ok(())
}

fn search_books(catalog: &Catalog) -> anyhow::Result<()> {
    let title = prompt::optional_field("Search by title (or leave blank)")?;
    let author = prompt::optional_field("Search by author (or leave blank)")?;

    let results = catalog.search_books(title.as_deref(), author.as_deref());
    if results.is_empty() {
        output::info("No books found.");
    } else {
        output::book_table(&results);
    }
    Ok(())
}

fn available_by_genre(catalog: &Catalog) -> anyhow::Result<()> {
    let genre = prompt::field("Genre", validation::validate_genre)?;

    let results = catalog.available_books_by_genre(&genre);
    if results.is_empty() {
        output::info("No available books in this genre.");
    } else {
        output::book_table(&results);
    }
    Ok(())
}

fn members_with_borrows(catalog: &Catalog) {
    let members = catalog.members_with_borrows();
    if members.is_empty() {
        output::info("Currently, no members have borrowed books.");
    } else {
        output::member_table(&members);
    }
}

fn most_popular_genre(catalog: &Catalog) {
    match catalog.most_popular_genre() {
        Some(genre) => output::info(&format!("Most popular genre: {}", genre)),
        None => output::info("No borrow history available."),
    }
}
