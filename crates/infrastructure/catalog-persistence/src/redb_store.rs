use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use camino::{Utf8Path, Utf8PathBuf};
use catalog_core::{Product, ProductDraft};
use chrono::Utc;
use redb::{Database, ReadableTable, TableDefinition, WriteTransaction};
use tracing::debug;

use crate::api::{DbState, CATALOG_REDB_FILENAME, CURRENT_SCHEMA};
use crate::codec::{decode_product, encode_product};
use crate::maintenance::quarantine_corrupt_file;
use crate::{ProductStore, StorageError};

const META: TableDefinition<&str, &str> = TableDefinition::new("meta");
// Keyed by insertion sequence so iteration yields arrival order.
const PRODUCTS: TableDefinition<u64, &[u8]> = TableDefinition::new("products");
const PRODUCT_IDS: TableDefinition<&str, u64> = TableDefinition::new("product_ids");

const META_FORMAT: &str = "format";
const FORMAT_TAG: &str = "catalog-redb";
const META_SCHEMA: &str = "schema_version";
const META_CREATED_AT: &str = "created_at";
const META_NEXT_SEQ: &str = "next_seq";
const META_LAST_WRITE_AT: &str = "last_write_at";

type DbCache = HashMap<Utf8PathBuf, Arc<Database>>;

/// One `catalog.redb` per root. Handles are shared process-wide because redb
/// refuses a second open of the same file.
#[derive(Debug, Default, Clone)]
pub struct RedbProductStore;

impl RedbProductStore {
    pub fn new() -> Self {
        Self
    }

    pub fn path_for_root(root: &Utf8Path) -> Utf8PathBuf {
        root.join(CATALOG_REDB_FILENAME)
    }

    fn handles() -> MutexGuard<'static, DbCache> {
        static HANDLES: OnceLock<Mutex<DbCache>> = OnceLock::new();
        HANDLES
            .get_or_init(Default::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // Holding the cache guard across the open keeps two threads from racing
    // to open the same file.
    fn open(&self, root: &Utf8Path, create: bool) -> Result<Arc<Database>, StorageError> {
        let path = Self::path_for_root(root);
        let mut handles = Self::handles();
        let exists = path.exists();
        if let Some(db) = handles.get(&path) {
            if exists {
                return Ok(db.clone());
            }
            handles.remove(&path);
        }

        let opened = if exists {
            Database::open(path.as_std_path()).map_err(StorageError::from)
        } else if create {
            std::fs::create_dir_all(root.as_std_path())?;
            debug!("creating catalog store at {path}");
            Database::create(path.as_std_path()).map_err(StorageError::from)
        } else {
            return Err(StorageError::Missing);
        };

        match opened.and_then(|db| init_schema(&db).map(|()| db)) {
            Ok(db) => {
                let db = Arc::new(db);
                handles.insert(path, db.clone());
                Ok(db)
            }
            Err(StorageError::Corrupt) => {
                let _ = quarantine_corrupt_file(&path);
                Err(StorageError::Corrupt)
            }
            Err(e) => Err(e),
        }
    }

    /// Opens an existing store, or yields `absent` when there is none yet.
    fn existing_or<T>(
        &self,
        root: &Utf8Path,
        absent: T,
    ) -> Result<Result<Arc<Database>, T>, StorageError> {
        match self.open(root, false) {
            Ok(db) => Ok(Ok(db)),
            Err(StorageError::Missing) => Ok(Err(absent)),
            Err(e) => Err(e),
        }
    }
}

/// Checks the meta table of an existing file, or lays out a fresh one. A file
/// from a newer release is reported before anything is written to it.
fn init_schema(db: &Database) -> Result<(), StorageError> {
    {
        let read_tx = db.begin_read()?;
        match read_tx.open_table(META) {
            Ok(meta) => {
                if let Some(format) = meta.get(META_FORMAT)? {
                    if format.value() != FORMAT_TAG {
                        return Err(StorageError::Corrupt);
                    }
                    let version = meta
                        .get(META_SCHEMA)?
                        .and_then(|g| g.value().parse::<u32>().ok());
                    return check_schema_version(version);
                }
            }
            Err(redb::TableError::TableDoesNotExist(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let write_tx = db.begin_write()?;
    {
        let mut meta = write_tx.open_table(META)?;
        let schema = CURRENT_SCHEMA.to_string();
        let created_at = Utc::now().to_rfc3339();
        meta.insert(META_FORMAT, FORMAT_TAG)?;
        meta.insert(META_SCHEMA, schema.as_str())?;
        meta.insert(META_CREATED_AT, created_at.as_str())?;
        meta.insert(META_NEXT_SEQ, "0")?;
    }
    write_tx.open_table(PRODUCTS)?;
    write_tx.open_table(PRODUCT_IDS)?;
    write_tx.commit()?;
    Ok(())
}

fn check_schema_version(version: Option<u32>) -> Result<(), StorageError> {
    match version {
        Some(v) if v == CURRENT_SCHEMA => Ok(()),
        Some(v) if v > CURRENT_SCHEMA => Err(StorageError::NewerSchema {
            found: v,
            supported: CURRENT_SCHEMA,
        }),
        _ => Err(StorageError::Corrupt),
    }
}

fn touch(write_tx: &WriteTransaction) -> Result<(), StorageError> {
    let ts = Utc::now().to_rfc3339();
    write_tx
        .open_table(META)?
        .insert(META_LAST_WRITE_AT, ts.as_str())?;
    Ok(())
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

impl ProductStore for RedbProductStore {
    fn validate(&self, root: &Utf8Path) -> Result<DbState, StorageError> {
        let path = Self::path_for_root(root);
        if !path.exists() {
            return Ok(DbState::Missing);
        }
        if Self::handles().contains_key(&path) {
            return Ok(DbState::Valid);
        }

        let checked = Database::open(path.as_std_path())
            .map_err(StorageError::from)
            .and_then(|db| init_schema(&db));
        match checked {
            Ok(()) => Ok(DbState::Valid),
            Err(StorageError::Busy) => Ok(DbState::Busy),
            Err(StorageError::NewerSchema { found, supported }) => {
                Ok(DbState::NewerSchema { found, supported })
            }
            Err(StorageError::Corrupt) => {
                let _ = quarantine_corrupt_file(&path);
                Ok(DbState::Corrupt)
            }
            Err(e) => Err(e),
        }
    }

    fn find_all(&self, root: &Utf8Path) -> Result<Vec<Product>, StorageError> {
        let db = match self.existing_or(root, Vec::new())? {
            Ok(db) => db,
            Err(empty) => return Ok(empty),
        };
        let read_tx = db.begin_read()?;
        let products = read_tx.open_table(PRODUCTS)?;
        products
            .iter()?
            .map(|row| {
                let (_, doc) = row?;
                decode_product(doc.value())
            })
            .collect()
    }

    fn find_by_id(&self, root: &Utf8Path, id: &str) -> Result<Option<Product>, StorageError> {
        let db = match self.existing_or(root, None)? {
            Ok(db) => db,
            Err(none) => return Ok(none),
        };
        let read_tx = db.begin_read()?;
        let Some(seq) = read_tx.open_table(PRODUCT_IDS)?.get(id)?.map(|g| g.value()) else {
            return Ok(None);
        };
        let products = read_tx.open_table(PRODUCTS)?;
        let doc = products
            .get(seq)?
            .ok_or_else(|| StorageError::DanglingIndex(id.to_string()))?;
        decode_product(doc.value()).map(Some)
    }

    fn insert(&self, root: &Utf8Path, draft: &ProductDraft) -> Result<Product, StorageError> {
        let db = self.open(root, true)?;
        let product = Product::from_draft(new_id(), draft.clone());
        let doc = encode_product(&product)?;

        let write_tx = db.begin_write()?;
        {
            let mut meta = write_tx.open_table(META)?;
            let seq = meta
                .get(META_NEXT_SEQ)?
                .and_then(|g| g.value().parse::<u64>().ok())
                .ok_or(StorageError::Corrupt)?;
            let next = (seq + 1).to_string();
            meta.insert(META_NEXT_SEQ, next.as_str())?;

            write_tx
                .open_table(PRODUCTS)?
                .insert(seq, doc.as_slice())?;
            write_tx
                .open_table(PRODUCT_IDS)?
                .insert(product.id.as_str(), seq)?;
        }
        touch(&write_tx)?;
        write_tx.commit()?;
        debug!("inserted product {}", product.id);
        Ok(product)
    }

    fn update(
        &self,
        root: &Utf8Path,
        id: &str,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, StorageError> {
        let db = match self.existing_or(root, None)? {
            Ok(db) => db,
            Err(none) => return Ok(none),
        };
        let product = Product::from_draft(id.to_string(), draft.clone());
        let doc = encode_product(&product)?;

        let write_tx = db.begin_write()?;
        let seq = write_tx
            .open_table(PRODUCT_IDS)?
            .get(id)?
            .map(|g| g.value());
        let Some(seq) = seq else {
            write_tx.abort()?;
            return Ok(None);
        };
        let replaced = write_tx
            .open_table(PRODUCTS)?
            .insert(seq, doc.as_slice())?
            .is_some();
        if !replaced {
            return Err(StorageError::DanglingIndex(id.to_string()));
        }
        touch(&write_tx)?;
        write_tx.commit()?;
        debug!("updated product {id}");
        Ok(Some(product))
    }

    fn delete(&self, root: &Utf8Path, id: &str) -> Result<Option<Product>, StorageError> {
        let db = match self.existing_or(root, None)? {
            Ok(db) => db,
            Err(none) => return Ok(none),
        };

        let write_tx = db.begin_write()?;
        let seq = write_tx
            .open_table(PRODUCT_IDS)?
            .remove(id)?
            .map(|g| g.value());
        let removed = match seq {
            Some(seq) => {
                let doc = write_tx
                    .open_table(PRODUCTS)?
                    .remove(seq)?
                    .map(|g| g.value().to_vec());
                touch(&write_tx)?;
                doc.map(|d| decode_product(&d)).transpose()?
            }
            None => None,
        };
        write_tx.commit()?;
        if removed.is_some() {
            debug!("deleted product {id}");
        }
        Ok(removed)
    }
}
