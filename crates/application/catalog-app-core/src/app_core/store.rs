use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::CatalogState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<Mutex<CatalogState>>,
}

impl AppStore {
    pub fn new(state: CatalogState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> CatalogState {
        self.lock().clone()
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(std::mem::take(&mut *guard), ev);
        *guard = next;
    }
}
