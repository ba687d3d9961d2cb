use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no catalog database under this root")]
    Missing,
    #[error("catalog database is corrupt or has a foreign format")]
    Corrupt,
    #[error("catalog database has schema {found}, this build supports {supported}")]
    NewerSchema { found: u32, supported: u32 },
    #[error("catalog database is held by another process")]
    Busy,
    #[error("index entry for product {0} has no document")]
    DanglingIndex(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("document codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("redb error: {0}")]
    Backend(Box<redb::Error>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    Missing,
    Corrupt,
    NewerSchema,
    Busy,
    Io,
    Codec,
    Backend,
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            StorageError::Missing => StorageErrorKind::Missing,
            StorageError::Corrupt | StorageError::DanglingIndex(_) => StorageErrorKind::Corrupt,
            StorageError::NewerSchema { .. } => StorageErrorKind::NewerSchema,
            StorageError::Busy => StorageErrorKind::Busy,
            StorageError::Io(_) => StorageErrorKind::Io,
            StorageError::Codec(_) => StorageErrorKind::Codec,
            StorageError::Backend(_) => StorageErrorKind::Backend,
        }
    }
}

impl From<redb::DatabaseError> for StorageError {
    fn from(value: redb::DatabaseError) -> Self {
        match value {
            redb::DatabaseError::DatabaseAlreadyOpen => Self::Busy,
            redb::DatabaseError::Storage(storage) => storage.into(),
            other => Self::Backend(Box::new(other.into())),
        }
    }
}

/// Unreadable pages and truncated files count as corruption so callers can
/// quarantine them.
impl From<redb::StorageError> for StorageError {
    fn from(value: redb::StorageError) -> Self {
        match value {
            redb::StorageError::Corrupted(_) => Self::Corrupt,
            redb::StorageError::Io(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof
                ) =>
            {
                Self::Corrupt
            }
            other => Self::Backend(Box::new(other.into())),
        }
    }
}

macro_rules! backend_errors {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for StorageError {
            fn from(value: $ty) -> Self {
                Self::Backend(Box::new(value.into()))
            }
        }
    )+};
}

backend_errors!(
    redb::Error,
    redb::TransactionError,
    redb::TableError,
    redb::CommitError,
);
