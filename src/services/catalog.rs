//! Catalog management by the librarian

use crate::{
    error::AppResult,
    models::{
        document::Document,
        user::{Account, AccountType},
    },
    repository::Catalog,
};

/// The librarian account. Catalog changes go through it so they are attributed.
#[derive(Debug, Clone)]
pub struct Librarian {
    id: i32,
    name: String,
}

impl Librarian {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    pub fn add_document(&self, catalog: &mut Catalog, document: Document) -> String {
        tracing::info!(
            librarian = %self.name,
            librarian_id = self.id,
            document_id = %document.id,
            kind = %document.kind,
            copies = document.total_copies,
            "Document added"
        );
        let added = catalog.add(document);
        format!("Document '{}' added by {}.", added.title, self.name)
    }

    pub fn remove_document(&self, catalog: &mut Catalog, id: &str) -> AppResult<String> {
        let removed = catalog.remove_by_id(id)?;
        tracing::info!(librarian = %self.name, document_id = %removed.id, "Document removed");
        Ok(format!("Document '{}' removed by {}.", removed.title, self.name))
    }

    pub fn list_documents(&self, catalog: &Catalog) -> String {
        if catalog.is_empty() {
            return "No documents in the library.".to_string();
        }
        let lines: Vec<String> = catalog.list_all().iter().map(ToString::to_string).collect();
        format!("Documents:\n{}", lines.join("\n"))
    }
}

impl Account for Librarian {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> AccountType {
        AccountType::Librarian
    }
}
