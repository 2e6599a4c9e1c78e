//! Repository layer: in-memory document storage

pub mod catalog;

pub use catalog::Catalog;
