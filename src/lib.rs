//! Elidune circulation desk
//!
//! A console catalog manager for a small library: documents (books, magazines,
//! DVDs), a librarian who maintains the catalog, and readers who borrow and
//! return copies under a per-reader loan limit.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
