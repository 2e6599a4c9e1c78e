//! User roles and account identity

use validator::Validate;

/// User account types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Reader,
    Librarian,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AccountType::Reader => "Reader",
            AccountType::Librarian => "Librarian",
        };
        write!(f, "{}", label)
    }
}

/// Anything that can open a session at the desk
pub trait Account {
    fn name(&self) -> &str;

    fn role(&self) -> AccountType;

    /// Display line used in session banners
    fn greeting(&self) -> String {
        format!("Welcome {} ({})", self.name(), self.role())
    }
}

/// Reader login request
#[derive(Debug, Validate)]
pub struct ReaderLogin {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Administrator login request
#[derive(Debug)]
pub struct AdminLogin {
    pub login: String,
    pub password: String,
}
