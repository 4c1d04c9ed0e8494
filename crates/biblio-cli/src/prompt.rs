//! Prompt helpers for the menu loop.
//!
//! Interactive sessions (stdin is a terminal) go through `dialoguer`, which
//! re-prompts on invalid input. When stdin is piped, the same prompts read
//! plain lines instead and fail fast on invalid values, which keeps the menu
//! scriptable and testable.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Present the menu and return the chosen index.
pub fn menu_choice(title: &str, items: &[&str]) -> anyhow::Result<usize> {
    if is_interactive() {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact()?;
        return Ok(choice);
    }

    println!();
    println!("{}", title);
    for (index, item) in items.iter().enumerate() {
        println!("{}. {}", index + 1, item);
    }
    let line = read_line("Enter your choice")?;
    let choice: usize = line
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid choice: {}", line))?;
    if choice == 0 || choice > items.len() {
        return Err(anyhow::anyhow!("Invalid choice: {}", line));
    }
    Ok(choice - 1)
}

/// Prompt for a single required field, checked by `validate`.
pub fn field(prompt: &str, validate: fn(&str) -> Result<(), String>) -> anyhow::Result<String> {
    if is_interactive() {
        let value: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input.trim()))
            .interact_text()?;
        return Ok(value.trim().to_string());
    }

    let value = read_line(prompt)?;
    validate(&value).map_err(|reason| anyhow::anyhow!("Invalid input: {}", reason))?;
    Ok(value)
}

/// Prompt for an optional filter; a blank answer means "no filter".
pub fn optional_field(prompt: &str) -> anyhow::Result<Option<String>> {
    let value: String = if is_interactive() {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?
    } else {
        read_line(prompt)?
    };
    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(anyhow::anyhow!("Unexpected end of input"));
    }
    Ok(line.trim().to_string())
}
