//! Loan (borrow) model and related types

use chrono::{DateTime, Utc};
use super::document::{Document, DocumentKey};

/// One borrow event, as recorded in a reader's ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub document_key: DocumentKey,
    pub document_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
}

impl Loan {
    pub fn new(document: &Document) -> Self {
        Self {
            document_key: document.key(),
            document_id: document.id.clone(),
            title: document.title.clone(),
            date: Utc::now(),
        }
    }

    pub fn is_for(&self, document: &Document) -> bool {
        self.document_key == document.key()
    }
}
