use camino::Utf8Path;
use catalog_core::{Product, ProductDraft};

pub const CATALOG_REDB_FILENAME: &str = "catalog.redb";
pub const CURRENT_SCHEMA: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbState {
    Missing,
    Valid,
    Busy,
    Corrupt,
    NewerSchema { found: u32, supported: u32 },
}

/// Document store holding product records under a data root.
///
/// Every write is a single transaction, so concurrent writers to the same id
/// resolve as last writer wins.
pub trait ProductStore: Send + Sync {
    fn validate(&self, root: &Utf8Path) -> Result<DbState, crate::StorageError>;

    /// All products in insertion order. A missing database reads as empty.
    fn find_all(&self, root: &Utf8Path) -> Result<Vec<Product>, crate::StorageError>;

    fn find_by_id(
        &self,
        root: &Utf8Path,
        id: &str,
    ) -> Result<Option<Product>, crate::StorageError>;

    /// Stores a new document and returns it with its generated id.
    fn insert(
        &self,
        root: &Utf8Path,
        draft: &ProductDraft,
    ) -> Result<Product, crate::StorageError>;

    /// Replaces name and price of an existing document, keeping its position.
    /// Returns `None` when no document has `id`.
    fn update(
        &self,
        root: &Utf8Path,
        id: &str,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, crate::StorageError>;

    /// Removes a document and returns what was removed. Absent ids are not an error.
    fn delete(&self, root: &Utf8Path, id: &str)
        -> Result<Option<Product>, crate::StorageError>;
}
