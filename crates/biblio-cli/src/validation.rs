//! Syntactic field validation applied before values reach the catalog.
//!
//! Validators are pure functions returning `Result<(), String>` so they plug
//! straight into `dialoguer`'s `validate_with`. The catalog still enforces
//! its own semantic invariants (uniqueness, existence, availability)
//! regardless of what arrives here.

/// Book IDs: 1-3 letters followed by 2-5 digits (e.g. B101, BK202).
pub fn validate_book_id(value: &str) -> Result<(), String> {
    if !matches_id_shape(value, 1, 3) {
        return Err("Invalid Book ID. Use letters followed by digits (e.g., B101, BK202).".into());
    }
    Ok(())
}

/// Member IDs: 1-4 letters followed by 2-5 digits (e.g. M001, MEM32).
pub fn validate_member_id(value: &str) -> Result<(), String> {
    if !matches_id_shape(value, 1, 4) {
        return Err("Invalid Member ID format. Use letters followed by digits (e.g., M001).".into());
    }
    Ok(())
}

fn matches_id_shape(value: &str, min_letters: usize, max_letters: usize) -> bool {
    let letters = value
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    let digits = value.chars().skip(letters).count();
    letters >= min_letters
        && letters <= max_letters
        && (2..=5).contains(&digits)
        && value.chars().skip(letters).all(|c| c.is_ascii_digit())
}

/// Names: non-empty, letters, spaces, and dots only.
pub fn validate_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Name cannot be empty.".into());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '.')
    {
        return Err("Name should contain only alphabets and spaces.".into());
    }
    Ok(())
}

/// Ages: integer text in the range 1-120.
pub fn validate_age(value: &str) -> Result<(), String> {
    parse_age(value).map(|_| ())
}

/// Parse an already-prompted age value.
pub fn parse_age(value: &str) -> Result<u8, String> {
    let age: u8 = value
        .trim()
        .parse()
        .map_err(|_| String::from("Age must be a whole number."))?;
    if !(1..=120).contains(&age) {
        return Err("Age must be between 1 and 120.".into());
    }
    Ok(age)
}

/// Contact numbers: 10-digit mobile numbers starting with 6-9.
pub fn validate_contact(value: &str) -> Result<(), String> {
    let valid = value.len() == 10
        && value.chars().all(|c| c.is_ascii_digit())
        && value.starts_with(['6', '7', '8', '9']);
    if !valid {
        return Err(
            "Invalid contact number. Use 10-digit mobile numbers starting with 6-9.".into(),
        );
    }
    Ok(())
}

pub fn validate_title(value: &str) -> Result<(), String> {
    non_blank(value, "Title")
}

pub fn validate_author(value: &str) -> Result<(), String> {
    non_blank(value, "Author")
}

pub fn validate_genre(value: &str) -> Result<(), String> {
    non_blank(value, "Genre")
}

fn non_blank(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty.", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_shapes() {
        assert!(validate_book_id("B101").is_ok());
        assert!(validate_book_id("BK202").is_ok());
        assert!(validate_book_id("ABC12345").is_ok());

        assert!(validate_book_id("").is_err());
        assert!(validate_book_id("101").is_err());
        assert!(validate_book_id("BOOK101").is_err()); // too many letters
        assert!(validate_book_id("B1").is_err()); // too few digits
        assert!(validate_book_id("B123456").is_err()); // too many digits
        assert!(validate_book_id("B10a").is_err());
    }

    #[test]
    fn test_member_id_shapes() {
        assert!(validate_member_id("M001").is_ok());
        assert!(validate_member_id("MEM32").is_ok());

        assert!(validate_member_id("MEMBER01").is_err());
        assert!(validate_member_id("M1").is_err());
    }

    #[test]
    fn test_name_charset() {
        assert!(validate_name("Asha Rao").is_ok());
        assert!(validate_name("J. R. R. Tolkien").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Asha2").is_err());
    }

    #[test]
    fn test_age_range() {
        assert_eq!(parse_age("34"), Ok(34));
        assert_eq!(parse_age(" 1 "), Ok(1));
        assert_eq!(parse_age("120"), Ok(120));

        assert!(parse_age("0").is_err());
        assert!(parse_age("121").is_err());
        assert!(parse_age("abc").is_err());
        assert!(parse_age("-3").is_err());
    }

    #[test]
    fn test_contact_format() {
        assert!(validate_contact("9876543210").is_ok());
        assert!(validate_contact("6000000000").is_ok());

        assert!(validate_contact("5876543210").is_err()); // bad leading digit
        assert!(validate_contact("987654321").is_err()); // too short
        assert!(validate_contact("98765432100").is_err()); // too long
        assert!(validate_contact("98765abcde").is_err());
    }

    #[test]
    fn test_non_blank_fields() {
        assert!(validate_title("Sapiens").is_ok());
        assert!(validate_title("  ").is_err());
        assert!(validate_author("").is_err());
        assert!(validate_genre("History").is_ok());
    }
}
