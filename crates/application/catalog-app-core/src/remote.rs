use catalog_infra::CatalogClient;

use crate::domain::{Product, ProductDraft};
use crate::ports::CatalogApi;

#[async_trait::async_trait]
impl CatalogApi for CatalogClient {
    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(CatalogClient::list_products(self).await?)
    }

    async fn create_product(&self, draft: &ProductDraft) -> anyhow::Result<Product> {
        Ok(CatalogClient::create_product(self, draft).await?)
    }

    async fn update_product(&self, id: &str, draft: &ProductDraft) -> anyhow::Result<Product> {
        Ok(CatalogClient::update_product(self, id, draft).await?)
    }

    async fn delete_product(&self, id: &str) -> anyhow::Result<()> {
        // The acknowledgment body carries nothing the store needs.
        CatalogClient::delete_product(self, id).await?;
        Ok(())
    }
}

/// Builds the HTTP-backed port with the default client settings.
pub fn http_catalog_api(base_url: &str) -> anyhow::Result<CatalogClient> {
    let client = catalog_infra::default_http_client()?;
    Ok(CatalogClient::new(client, base_url)?)
}
