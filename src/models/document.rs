//! Document (catalog entry) model and related types.
//!
//! A document is one catalog entry with a pool of copies. Books, magazines and
//! DVDs share the same circulation rules and only differ in their descriptive
//! fields, carried by [`DocumentKind`].

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Internal identity of a document instance.
///
/// Public ids are not unique in the catalog, so loans refer to this key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentKey(Uuid);

impl DocumentKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind-specific fields
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentKind {
    Book {
        page_count: u32,
    },
    Magazine {
        issue_number: u32,
        publication_date: NaiveDate,
    },
    Dvd {
        /// Running time in minutes
        duration: u32,
    },
}

impl DocumentKind {
    /// Short label used in listings and logs
    pub fn as_code(&self) -> &'static str {
        match self {
            DocumentKind::Book { .. } => "book",
            DocumentKind::Magazine { .. } => "magazine",
            DocumentKind::Dvd { .. } => "dvd",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Availability label shown in catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Availability::Available => "Available",
            Availability::Unavailable => "Unavailable",
        };
        write!(f, "{}", label)
    }
}

/// Catalog document with its copy counters
#[derive(Debug, Clone)]
pub struct Document {
    key: DocumentKey,
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies provisioned when the document entered the catalog
    pub total_copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
    pub kind: DocumentKind,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: u32,
        kind: DocumentKind,
    ) -> Self {
        Self {
            key: DocumentKey::new(),
            id: id.into(),
            title: title.into(),
            author: author.into(),
            total_copies: copies,
            available_copies: copies,
            kind,
        }
    }

    pub fn book(id: &str, title: &str, author: &str, page_count: u32, copies: u32) -> Self {
        Self::new(id, title, author, copies, DocumentKind::Book { page_count })
    }

    pub fn magazine(
        id: &str,
        title: &str,
        author: &str,
        issue_number: u32,
        publication_date: NaiveDate,
        copies: u32,
    ) -> Self {
        Self::new(
            id,
            title,
            author,
            copies,
            DocumentKind::Magazine { issue_number, publication_date },
        )
    }

    pub fn dvd(id: &str, title: &str, author: &str, duration: u32, copies: u32) -> Self {
        Self::new(id, title, author, copies, DocumentKind::Dvd { duration })
    }

    pub fn key(&self) -> DocumentKey {
        self.key
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    pub fn availability(&self) -> Availability {
        Availability::from(self.is_available())
    }

    /// Take one copy off the shelf for `reader`
    pub fn borrow(&mut self, reader: &str) -> AppResult<String> {
        if !self.is_available() {
            return Err(AppError::Unavailable(self.title.clone()));
        }
        self.available_copies -= 1;
        Ok(format!("{} borrowed '{}'.", reader, self.title))
    }

    /// Put one copy back on the shelf.
    ///
    /// The counter is not capped at `total_copies`; callers that can vouch for
    /// an outstanding copy (the loan ledger) are expected to gate this.
    pub fn return_copy(&mut self) -> String {
        self.available_copies = self.available_copies.saturating_add(1);
        if self.available_copies > self.total_copies {
            tracing::warn!(
                document_id = %self.id,
                available = self.available_copies,
                total = self.total_copies,
                "Available copies exceed provisioned copies"
            );
        }
        format!("The document '{}' has been returned.", self.title)
    }

    pub fn describe(&self) -> String {
        match &self.kind {
            DocumentKind::Book { page_count } => {
                format!("Book: {} ({}), Pages: {}", self.title, self.author, page_count)
            }
            DocumentKind::Magazine { issue_number, publication_date } => format!(
                "Magazine: {} (No. {}), Date: {}",
                self.title,
                issue_number,
                publication_date.format("%Y-%m-%d")
            ),
            DocumentKind::Dvd { duration } => {
                format!("DVD: {} ({}), Duration: {} min", self.title, self.author, duration)
            }
        }
    }
}

/// Create document request (as collected by the console)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDocument {
    #[validate(length(min = 1, message = "Document ID must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    pub copies: u32,
    pub kind: DocumentKind,
}

impl TryFrom<CreateDocument> for Document {
    type Error = AppError;

    fn try_from(data: CreateDocument) -> AppResult<Self> {
        let data = CreateDocument {
            id: data.id.trim().to_string(),
            title: data.title.trim().to_string(),
            author: data.author.trim().to_string(),
            ..data
        };
        data.validate()?;
        Ok(Document::new(data.id, data.title, data.author, data.copies, data.kind))
    }
}

/// One catalog line: title, author and availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentShort {
    pub id: String,
    pub title: String,
    pub author: String,
    pub availability: Availability,
    pub available_copies: u32,
}

impl From<&Document> for DocumentShort {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            author: doc.author.clone(),
            availability: doc.availability(),
            available_copies: doc.available_copies,
        }
    }
}

impl std::fmt::Display for DocumentShort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - Copies: {}",
            self.title, self.author, self.availability
        )
    }
}
