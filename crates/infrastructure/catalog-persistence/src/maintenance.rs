use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use tracing::warn;

use crate::CATALOG_REDB_FILENAME;

static QUARANTINED: AtomicU64 = AtomicU64::new(0);

/// Moves an unreadable database aside so the next write starts a fresh one.
/// Returns where the file went, or `None` if there was nothing to move.
pub fn quarantine_corrupt_file(path: &Utf8Path) -> std::io::Result<Option<Utf8PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let seq = QUARANTINED.fetch_add(1, Ordering::Relaxed);
    let base = path.file_name().unwrap_or(CATALOG_REDB_FILENAME);
    let target = path.with_file_name(format!(
        "{base}.corrupt-{stamp}-{pid}-{seq}",
        pid = std::process::id()
    ));
    std::fs::rename(path, &target)?;
    warn!("catalog store at {path} is corrupt, moved to {target}");
    Ok(Some(target))
}
