use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, Context};
use camino::Utf8PathBuf;
use catalog_config::{DEFAULT_PORT, ENV_DATA_DIR, ENV_PORT, FALLBACK_DATA_DIR};
use directories::ProjectDirs;
use tracing::{info, warn};

const QUALIFIER: &str = "com";
const ORG: &str = "catalog";
const APP: &str = "catalog-server";

pub struct Config {
    pub port: u16,
    /// Root directory of the document store.
    pub data_dir: Utf8PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = try_load(&lookup, ENV_PORT, DEFAULT_PORT)?;
        let data_dir = match lookup(ENV_DATA_DIR).filter(|s| !s.trim().is_empty()) {
            Some(dir) => Utf8PathBuf::from(dir),
            None => {
                let dir = default_data_dir();
                info!("{ENV_DATA_DIR} not set, using default: {dir}");
                dir
            }
        };
        Ok(Self { port, data_dir })
    }
}

fn try_load<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("invalid {key} value {raw:?}: {e}")
    })
}

fn default_data_dir() -> Utf8PathBuf {
    let platform = ProjectDirs::from(QUALIFIER, ORG, APP)
        .context("Could not determine data directory")
        .and_then(|dirs| {
            Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf())
                .map_err(|p| anyhow!("data directory is not UTF-8: {}", p.display()))
        });
    match platform {
        Ok(dir) => dir,
        Err(e) => {
            warn!("{e}, falling back to ./{FALLBACK_DATA_DIR}");
            Utf8PathBuf::from(FALLBACK_DATA_DIR)
        }
    }
}
