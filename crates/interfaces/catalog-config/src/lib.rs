//! Central configuration constants for ports, URLs and environment keys.

/// Port the catalog service listens on when `CATALOG_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Base URL the front end talks to when neither flag nor env var is given.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Directory used for the store when no platform data dir can be resolved.
pub const FALLBACK_DATA_DIR: &str = "data";

/// Connect timeout for the HTTP client, in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

pub const ENV_PORT: &str = "CATALOG_PORT";
pub const ENV_DATA_DIR: &str = "CATALOG_DATA_DIR";
pub const ENV_API_URL: &str = "CATALOG_API_URL";

/// Capacity of the kernel's completion channel.
pub const COMPLETION_CHANNEL_CAPACITY: usize = 100;
