//! Full desk sessions driven through a scripted console

use std::collections::VecDeque;

use elidune_circulation::{
    cli::{self, Console},
    services::auth::hash_password,
    AppConfig, AppResult, Library,
};

/// Console replaying canned input and recording everything printed
struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> AppResult<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn print(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

fn configured_library() -> Library {
    let mut config = AppConfig::default();
    config.admin.password_hash = Some(hash_password("desk-password").unwrap());
    Library::new(&config)
}

#[test]
fn test_admin_then_reader_session() {
    let mut library = configured_library();
    let mut console = ScriptedConsole::new(&[
        // admin: add a book, a magazine (with a bad date first), list, back
        "1", "admin", "desk-password",
        "1", "1", "Le Pain Nu", "Mohamed Choukri", "B1", "160", "2",
        "1", "7", "2", "Zamane", "Collectif", "M1", "158", "15/01/2024", "2024-01-15", "1",
        "3",
        "4",
        // reader: borrow the book three times, history, current loans, back
        "2", "amina", "password123",
        "1", "B1", "1", "B1", "1", "B1",
        "2", "M1",
        "3", "4",
        "5",
        "3",
    ]);

    cli::run(&mut library, &mut console).unwrap();

    assert!(console.printed("Welcome Mme Majdouline (Librarian)"));
    assert!(console.printed("Document 'Le Pain Nu' added by Mme Majdouline."));
    assert!(console.printed("Invalid choice: 7. Please try again."));
    assert!(console.printed("Please enter a date as YYYY-MM-DD."));
    assert!(console.printed("Zamane (Collectif) - Copies: Available"));
    assert!(console.printed("Welcome amina (Reader)"));
    assert!(console.printed("The document 'Le Pain Nu' is not available."));
    assert!(console.printed("amina has not borrowed the document 'Zamane'."));
    assert!(console.printed("Loan history of amina: Le Pain Nu, Le Pain Nu"));
    assert!(console.printed("Current loans of amina: Le Pain Nu, Le Pain Nu"));
    assert!(console.printed("Goodbye."));
}

#[test]
fn test_admin_wrong_password_then_success() {
    let mut library = configured_library();
    let mut console = ScriptedConsole::new(&[
        "1", "admin", "nope", "admin", "desk-password",
        "2", "missing",
        "4", "3",
    ]);

    cli::run(&mut library, &mut console).unwrap();

    assert!(console.printed("Authentication failed: Invalid username or password"));
    assert!(console.printed("No document found with ID 'missing'."));
    assert!(console.printed("Goodbye."));
}

#[test]
fn test_borrow_unknown_id() {
    let mut library = configured_library();
    let mut console = ScriptedConsole::new(&["2", "amina", "password123", "1", "Z9", "5", "3"]);

    cli::run(&mut library, &mut console).unwrap();

    assert!(console.printed("No document found with ID 'Z9'."));
}
