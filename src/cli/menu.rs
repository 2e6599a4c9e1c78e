//! Menu loops of the desk.
//!
//! Every menu is a loop: an invalid choice prints a message and asks again.
//! End of input leaves all menus at once.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{
        document::{CreateDocument, DocumentKind},
        user::{Account, AdminLogin, ReaderLogin},
    },
    services::Library,
};

use super::Console;

const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Read a trimmed line, leaving the calling menu with `Flow::Quit` on end of input
macro_rules! ask {
    ($console:expr, $prompt:expr) => {
        match $console.read_line($prompt)? {
            Some(line) => line.trim().to_string(),
            None => return Ok(Flow::Quit),
        }
    };
}

/// Run the main menu until the user quits or input ends
pub fn run<C: Console + ?Sized>(library: &mut Library, console: &mut C) -> AppResult<()> {
    console.print("Welcome to the library management system");
    while main_menu(library, console)? == Flow::Continue {}
    tracing::info!("Session closed");
    Ok(())
}

fn main_menu<C: Console + ?Sized>(library: &mut Library, console: &mut C) -> AppResult<Flow> {
    console.print("\nMain menu:\n1. Administrator login\n2. Reader login\n3. Quit");
    let choice = ask!(console, CHOICE_PROMPT);
    match choice.as_str() {
        "1" => admin_login(library, console),
        "2" => reader_login(library, console),
        "3" => {
            console.print("Goodbye.");
            Ok(Flow::Quit)
        }
        other => {
            report(console, Err(AppError::InvalidChoice(other.to_string())))?;
            Ok(Flow::Continue)
        }
    }
}

fn admin_login<C: Console + ?Sized>(library: &mut Library, console: &mut C) -> AppResult<Flow> {
    console.print("\nEnter your username and password to access the administration menu.");
    let max_attempts = library.auth.max_admin_attempts();

    for _ in 0..max_attempts {
        let login = ask!(console, "Username: ");
        let password = ask!(console, "Password: ");
        let outcome = library
            .login_admin(&AdminLogin { login, password })
            .map(|librarian| librarian.greeting());
        match outcome {
            Ok(greeting) => {
                console.print(&greeting);
                return admin_menu(library, console);
            }
            Err(e) => report(console, Err(e))?,
        }
    }

    console.print("Too many failed attempts, back to the main menu.");
    Ok(Flow::Continue)
}

fn admin_menu<C: Console + ?Sized>(library: &mut Library, console: &mut C) -> AppResult<Flow> {
    loop {
        console.print(
            "\nAdministrator menu:\n1. Add a document\n2. Remove a document\n3. List documents\n4. Back to main menu",
        );
        let choice = ask!(console, CHOICE_PROMPT);
        match choice.as_str() {
            "1" => {
                if add_document(library, console)? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
            "2" => {
                let id = ask!(console, "Enter the ID of the document to remove: ");
                report(console, library.remove_document(&id))?;
            }
            "3" => console.print(&library.list_documents()),
            "4" => return Ok(Flow::Continue),
            other => report(console, Err(AppError::InvalidChoice(other.to_string())))?,
        }
    }
}

fn add_document<C: Console + ?Sized>(library: &mut Library, console: &mut C) -> AppResult<Flow> {
    let kind_choice = loop {
        console.print("\nWhat do you want to add?\n1. Book\n2. Magazine\n3. DVD");
        let choice = ask!(console, CHOICE_PROMPT);
        match choice.as_str() {
            "1" | "2" | "3" => break choice,
            other => report(console, Err(AppError::InvalidChoice(other.to_string())))?,
        }
    };

    let title = ask!(console, "Title: ");
    let author = ask!(console, "Author: ");
    let id = ask!(console, "Document ID: ");
    let kind = match kind_choice.as_str() {
        "1" => {
            let Some(page_count) = ask_parsed::<u32, C>(console, "Number of pages: ")? else {
                return Ok(Flow::Quit);
            };
            DocumentKind::Book { page_count }
        }
        "2" => {
            let Some(issue_number) = ask_parsed::<u32, C>(console, "Issue number: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(publication_date) = ask_date(console, "Publication date (YYYY-MM-DD): ")? else {
                return Ok(Flow::Quit);
            };
            DocumentKind::Magazine { issue_number, publication_date }
        }
        _ => {
            let Some(duration) = ask_parsed::<u32, C>(console, "Duration (minutes): ")? else {
                return Ok(Flow::Quit);
            };
            DocumentKind::Dvd { duration }
        }
    };
    let Some(copies) = ask_parsed::<u32, C>(console, "Number of copies: ")? else {
        return Ok(Flow::Quit);
    };

    let data = CreateDocument { id, title, author, copies, kind };
    report(console, library.add_document(data))?;
    Ok(Flow::Continue)
}

fn reader_login<C: Console + ?Sized>(library: &mut Library, console: &mut C) -> AppResult<Flow> {
    let username = ask!(console, "Username: ");
    let password = ask!(console, "Password (at least 8 characters): ");

    let credentials = ReaderLogin { username, password };
    let outcome = library
        .login_reader(&credentials)
        .map(|reader| reader.greeting());
    match outcome {
        Ok(greeting) => console.print(&greeting),
        Err(e) => {
            report(console, Err(e))?;
            return Ok(Flow::Continue);
        }
    }
    reader_menu(library, console, &credentials.username)
}

fn reader_menu<C: Console + ?Sized>(
    library: &mut Library,
    console: &mut C,
    reader: &str,
) -> AppResult<Flow> {
    loop {
        console.print(
            "\nReader menu:\n1. Borrow a document\n2. Return a document\n3. Show loan history\n4. Show current loans\n5. Back to main menu",
        );
        let choice = ask!(console, CHOICE_PROMPT);
        match choice.as_str() {
            "1" => {
                let id = ask!(console, "Enter the ID of the document to borrow: ");
                report(console, library.borrow(reader, &id))?;
            }
            "2" => {
                let id = ask!(console, "Enter the ID of the document to return: ");
                report(console, library.return_document(reader, &id))?;
            }
            "3" => report(console, library.history(reader))?,
            "4" => report(console, library.current_loans(reader))?,
            "5" => return Ok(Flow::Continue),
            other => report(console, Err(AppError::InvalidChoice(other.to_string())))?,
        }
    }
}

/// Print an outcome. Recoverable errors are shown, the rest propagate.
fn report<C: Console + ?Sized>(console: &mut C, outcome: AppResult<String>) -> AppResult<()> {
    match outcome {
        Ok(message) => {
            console.print(&message);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            tracing::debug!(code = e.code() as u32, "Operation refused: {}", e);
            console.print(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn ask_parsed<T: FromStr, C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> AppResult<Option<T>> {
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => console.print("Please enter a whole number."),
        }
    }
}

fn ask_date<C: Console + ?Sized>(console: &mut C, prompt: &str) -> AppResult<Option<NaiveDate>> {
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => console.print("Please enter a date as YYYY-MM-DD."),
        }
    }
}
