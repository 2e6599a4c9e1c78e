//! Data models for the circulation desk

pub mod document;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use document::{Availability, CreateDocument, Document, DocumentKey, DocumentKind, DocumentShort};
pub use loan::Loan;
pub use user::{Account, AccountType, AdminLogin, ReaderLogin};
