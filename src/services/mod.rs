//! Business logic services

pub mod auth;
pub mod catalog;
pub mod loans;
pub mod readers;

use std::collections::HashMap;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{
        document::{CreateDocument, Document},
        user::{AdminLogin, ReaderLogin},
    },
    repository::Catalog,
};

/// One desk session: the catalog, its librarian and the readers seen so far.
///
/// Everything lives in memory and is dropped with the session.
#[derive(Debug)]
pub struct Library {
    pub catalog: Catalog,
    pub librarian: catalog::Librarian,
    pub auth: auth::AuthService,
    readers: HashMap<String, readers::Reader>,
    max_loans: usize,
}

impl Library {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            librarian: catalog::Librarian::new(config.admin.id, config.admin.name.clone()),
            auth: auth::AuthService::new(config.admin.clone()),
            readers: HashMap::new(),
            max_loans: config.loans.max_loans,
        }
    }

    pub fn login_admin(&self, credentials: &AdminLogin) -> AppResult<&catalog::Librarian> {
        self.auth.authenticate_admin(credentials)?;
        Ok(&self.librarian)
    }

    /// Open a reader session, resuming the ledger of a returning reader
    pub fn login_reader(&mut self, credentials: &ReaderLogin) -> AppResult<&readers::Reader> {
        self.auth.authenticate_reader(credentials)?;
        let max_loans = self.max_loans;
        let reader = self
            .readers
            .entry(credentials.username.clone())
            .or_insert_with(|| readers::Reader::new(credentials.username.clone(), max_loans));
        tracing::debug!(reader = %credentials.username, reader_id = %reader.id(), "Reader session opened");
        Ok(reader)
    }

    pub fn reader(&self, name: &str) -> AppResult<&readers::Reader> {
        self.readers
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("No reader named '{}'.", name)))
    }

    pub fn add_document(&mut self, data: CreateDocument) -> AppResult<String> {
        let document = Document::try_from(data)?;
        Ok(self.librarian.add_document(&mut self.catalog, document))
    }

    pub fn remove_document(&mut self, id: &str) -> AppResult<String> {
        self.librarian.remove_document(&mut self.catalog, id)
    }

    pub fn list_documents(&self) -> String {
        self.librarian.list_documents(&self.catalog)
    }

    pub fn borrow(&mut self, reader: &str, document_id: &str) -> AppResult<String> {
        let reader = self
            .readers
            .get_mut(reader)
            .ok_or_else(|| AppError::NotFound(format!("No reader named '{}'.", reader)))?;
        let document = self.catalog.get_by_id_mut(document_id)?;
        reader.borrow(document)
    }

    pub fn return_document(&mut self, reader: &str, document_id: &str) -> AppResult<String> {
        let reader = self
            .readers
            .get_mut(reader)
            .ok_or_else(|| AppError::NotFound(format!("No reader named '{}'.", reader)))?;
        let document = self.catalog.get_by_id_mut(document_id)?;
        reader.return_document(document)
    }

    pub fn history(&self, reader: &str) -> AppResult<String> {
        Ok(self.reader(reader)?.history())
    }

    pub fn current_loans(&self, reader: &str) -> AppResult<String> {
        Ok(self.reader(reader)?.current_loans())
    }
}
