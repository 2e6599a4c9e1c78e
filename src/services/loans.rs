//! Loan bookkeeping for a single reader

use crate::{
    error::{AppError, AppResult},
    models::{document::Document, loan::Loan},
};

/// Active loans and full borrow history of one reader.
///
/// The number of active loans never exceeds `max_loans`.
#[derive(Debug, Clone)]
pub struct LoanLedger {
    owner: String,
    active: Vec<Loan>,
    history: Vec<Loan>,
    max_loans: usize,
}

impl LoanLedger {
    pub fn new(owner: impl Into<String>, max_loans: usize) -> Self {
        Self {
            owner: owner.into(),
            active: Vec::new(),
            history: Vec::new(),
            max_loans,
        }
    }

    /// Borrow one copy of `document`.
    ///
    /// The loan limit is checked before availability.
    pub fn borrow(&mut self, document: &mut Document) -> AppResult<String> {
        if self.active.len() >= self.max_loans {
            tracing::warn!(
                reader = %self.owner,
                max_loans = self.max_loans,
                "Borrow refused: loan limit reached"
            );
            return Err(AppError::LimitReached {
                reader: self.owner.clone(),
                max: self.max_loans,
            });
        }
        if !document.is_available() {
            tracing::warn!(
                reader = %self.owner,
                document_id = %document.id,
                "Borrow refused: no copy available"
            );
            return Err(AppError::Unavailable(document.title.clone()));
        }

        let message = document.borrow(&self.owner)?;
        let loan = Loan::new(document);
        self.active.push(loan.clone());
        self.history.push(loan);

        tracing::info!(
            reader = %self.owner,
            document_id = %document.id,
            remaining = document.available_copies,
            "Document borrowed"
        );
        Ok(message)
    }

    /// Give back `document` if it is one of the active loans
    pub fn return_document(&mut self, document: &mut Document) -> AppResult<String> {
        let Some(position) = self.active.iter().position(|l| l.is_for(document)) else {
            tracing::warn!(
                reader = %self.owner,
                document_id = %document.id,
                "Return refused: document not borrowed by reader"
            );
            return Err(AppError::NotBorrowed {
                reader: self.owner.clone(),
                title: document.title.clone(),
            });
        };

        self.active.remove(position);
        let message = document.return_copy();

        tracing::info!(
            reader = %self.owner,
            document_id = %document.id,
            available = document.available_copies,
            "Document returned"
        );
        Ok(message)
    }

    /// Titles of every borrow, oldest first (returned ones included)
    pub fn history(&self) -> Vec<&str> {
        self.history.iter().map(|l| l.title.as_str()).collect()
    }

    /// Titles of active loans, in borrow order
    pub fn current_loans(&self) -> Vec<&str> {
        self.active.iter().map(|l| l.title.as_str()).collect()
    }

    pub fn history_summary(&self) -> String {
        let titles = self.history();
        if titles.is_empty() {
            format!("Loan history of {}: no loans.", self.owner)
        } else {
            format!("Loan history of {}: {}", self.owner, titles.join(", "))
        }
    }

    pub fn current_loans_summary(&self) -> String {
        let titles = self.current_loans();
        if titles.is_empty() {
            format!("Current loans of {}: no active loans.", self.owner)
        } else {
            format!("Current loans of {}: {}", self.owner, titles.join(", "))
        }
    }
}
