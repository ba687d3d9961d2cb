use std::sync::OnceLock;

use anyhow::anyhow;
use tokio::runtime::{Builder, Runtime};

const EFFECT_WORKERS: usize = 2;

static EFFECT_RUNTIME: OnceLock<Result<Runtime, String>> = OnceLock::new();

/// Process-wide runtime for effects dispatched from outside any runtime,
/// built on first use. A build failure is remembered and reported every time.
pub(crate) fn runtime() -> anyhow::Result<&'static Runtime> {
    let built = EFFECT_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(EFFECT_WORKERS)
            .thread_name("catalog-effects")
            .enable_all()
            .build()
            .map_err(|e| e.to_string())
    });
    built.as_ref().map_err(|msg| anyhow!("{msg}"))
}
