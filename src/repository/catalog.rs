//! Catalog storage.
//!
//! Documents are kept in insertion order and looked up by linear scan. Public
//! ids are not required to be unique: the first matching document wins.

use crate::{
    error::{AppError, AppResult},
    models::document::{Document, DocumentShort},
};

#[derive(Debug, Default)]
pub struct Catalog {
    documents: Vec<Document>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. Duplicate ids are accepted and shadowed on lookup.
    pub fn add(&mut self, document: Document) -> &Document {
        if self.find_by_id(&document.id).is_some() {
            tracing::warn!(
                document_id = %document.id,
                "Document id already present, new entry will be shadowed on lookup"
            );
        }
        self.documents.push(document);
        &self.documents[self.documents.len() - 1]
    }

    /// Remove the first document with the given id
    pub fn remove_by_id(&mut self, id: &str) -> AppResult<Document> {
        let position = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.documents.remove(position))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }

    /// Resolve an id or fail with `NotFound`
    pub fn get_by_id_mut(&mut self, id: &str) -> AppResult<&mut Document> {
        self.find_by_id_mut(id).ok_or_else(|| not_found(id))
    }

    pub fn list_all(&self) -> Vec<DocumentShort> {
        self.documents.iter().map(DocumentShort::from).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No document found with ID '{}'.", id))
}
