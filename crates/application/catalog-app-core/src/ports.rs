use crate::domain::{Product, ProductDraft};

/// The REST surface as seen by the effect runner.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    async fn list_products(&self) -> anyhow::Result<Vec<Product>>;
    async fn create_product(&self, draft: &ProductDraft) -> anyhow::Result<Product>;
    async fn update_product(&self, id: &str, draft: &ProductDraft) -> anyhow::Result<Product>;
    async fn delete_product(&self, id: &str) -> anyhow::Result<()>;
}
