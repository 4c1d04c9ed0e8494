//! Table and status output for the menu loop.

use biblio_core::{Book, CatalogError, Member};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn info(message: &str) {
    println!("{}", message);
}

/// Report a violated business invariant and carry on with the menu.
pub fn domain_error(err: &CatalogError) {
    eprintln!("{}", format!("Error: {}", err).red());
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render books with their loan status.
pub fn book_table(books: &[&Book]) {
    let mut table = styled_table();
    table.set_header(vec!["ID", "Title", "Author", "Genre", "Status"]);
    for book in books {
        let status = if book.available { "Available" } else { "Issued" };
        table.add_row(vec![
            book.book_id.as_str(),
            book.title.as_str(),
            book.author.as_str(),
            book.genre.as_str(),
            status,
        ]);
    }
    println!("{table}");
}

/// Render members and how many books each currently holds.
pub fn member_table(members: &[&Member]) {
    let mut table = styled_table();
    table.set_header(vec!["ID", "Name", "Borrowed"]);
    for member in members {
        let count = member.borrowed_books.len().to_string();
        table.add_row(vec![
            member.member_id.as_str(),
            member.name.as_str(),
            count.as_str(),
        ]);
    }
    println!("{table}");
}
