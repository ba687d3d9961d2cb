use std::future::Future;
use std::sync::Arc;

use catalog_core::{validate_draft, ValidationError};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::ports::CatalogApi;

/// Effect runner: turns each command into one request event plus exactly one
/// call against the [`CatalogApi`], whose outcome comes back as a completion.
///
/// Completions are applied in the order they arrive, which is not necessarily
/// dispatch order. Nothing is retried, deduplicated or cancelled.
pub struct AppKernel<A> {
    pub store: AppStore,
    api: Arc<A>,
    in_flight: usize,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<A> AppKernel<A>
where
    A: CatalogApi,
{
    pub fn new(store: AppStore, api: A) -> Self {
        let (tx, rx) = mpsc::channel(catalog_config::COMPLETION_CHANNEL_CAPACITY);
        Self {
            store,
            api: Arc::new(api),
            in_flight: 0,
            tx,
            rx,
        }
    }

    /// Validation failures are returned before any state change or request.
    pub fn dispatch(&mut self, cmd: AppCommand) -> Result<(), ValidationError> {
        match cmd {
            AppCommand::LoadProducts => {
                self.store.apply(DomainEvent::FetchRequested);
                let api = self.api.clone();
                self.spawn_effect(DomainEvent::FetchFailed, async move {
                    match api.list_products().await {
                        Ok(list) => DomainEvent::FetchSucceeded(list),
                        Err(e) => DomainEvent::FetchFailed(e.to_string()),
                    }
                });
            }

            AppCommand::AddProduct(draft) => {
                validate_draft(&draft)?;
                self.store.apply(DomainEvent::AddRequested(draft.clone()));
                let api = self.api.clone();
                self.spawn_effect(DomainEvent::AddFailed, async move {
                    match api.create_product(&draft).await {
                        Ok(product) => DomainEvent::AddSucceeded(product),
                        Err(e) => DomainEvent::AddFailed(e.to_string()),
                    }
                });
            }

            AppCommand::UpdateProduct(product) => {
                let draft = product.draft();
                validate_draft(&draft)?;
                let id = product.id.clone();
                self.store.apply(DomainEvent::UpdateRequested(product));
                let api = self.api.clone();
                self.spawn_effect(DomainEvent::UpdateFailed, async move {
                    match api.update_product(&id, &draft).await {
                        Ok(updated) => DomainEvent::UpdateSucceeded(updated),
                        Err(e) => DomainEvent::UpdateFailed(e.to_string()),
                    }
                });
            }

            AppCommand::DeleteProduct(id) => {
                self.store.apply(DomainEvent::DeleteRequested(id.clone()));
                let api = self.api.clone();
                self.spawn_effect(DomainEvent::DeleteFailed, async move {
                    match api.delete_product(&id).await {
                        Ok(()) => DomainEvent::DeleteSucceeded(id),
                        Err(e) => DomainEvent::DeleteFailed(e.to_string()),
                    }
                });
            }
        }
        Ok(())
    }

    fn spawn_effect<F>(&mut self, fail: fn(String) -> DomainEvent, effect: F)
    where
        F: Future<Output = DomainEvent> + Send + 'static,
    {
        let tx = self.tx.clone();
        // A panicking effect still has to produce a completion, or `settle`
        // would wait on it forever.
        let task = async move {
            let ev = match tokio::spawn(effect).await {
                Ok(ev) => ev,
                Err(join) => {
                    warn!("request task failed: {join}");
                    fail(format!("Request task failed: {join}"))
                }
            };
            debug!("effect completed: {ev:?}");
            let _ = tx.send(ev).await;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(_) => match crate::async_runtime::runtime() {
                Ok(rt) => {
                    rt.spawn(task);
                }
                Err(e) => {
                    warn!("no runtime available for effect: {e}");
                    self.store
                        .apply(fail(format!("Failed to start request task: {e}")));
                    return;
                }
            },
        }
        self.in_flight += 1;
    }

    fn complete(&mut self, ev: DomainEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.store.apply(ev);
    }

    /// Applies every completion that has already arrived, without waiting.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.complete(ev);
        }
    }

    /// Waits for the next completion and applies it. Returns `None` when no
    /// request is outstanding.
    pub async fn next_event(&mut self) -> Option<DomainEvent> {
        if self.in_flight == 0 {
            return None;
        }
        let ev = self.rx.recv().await?;
        self.complete(ev.clone());
        Some(ev)
    }

    /// Waits until every dispatched request has completed.
    pub async fn settle(&mut self) {
        while self.next_event().await.is_some() {}
    }

    /// Blocking form of [`settle`](Self::settle) for callers outside a runtime.
    pub fn settle_blocking(&mut self) {
        while self.in_flight > 0 {
            match self.rx.blocking_recv() {
                Some(ev) => self.complete(ev),
                None => break,
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
