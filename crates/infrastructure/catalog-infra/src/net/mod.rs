use std::time::Duration;

use catalog_core::{Acknowledgment, Product, ProductDraft};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("invalid base url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn default_http_client() -> Result<Client, NetError> {
    Ok(Client::builder()
        .user_agent(concat!("catalog/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(catalog_config::CONNECT_TIMEOUT_SECS))
        .build()?)
}

/// Thin client for the four `/products` endpoints.
///
/// Each method issues exactly one request. Nothing is retried.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base: Url,
}

/// Treat the input as a directory base so `products` joins beneath any path
/// prefix instead of replacing its last segment.
pub(crate) fn normalize_base(base_url: &str) -> Result<Url, NetError> {
    let mut url = Url::parse(base_url).map_err(|e| NetError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(NetError::InvalidUrl {
            url: base_url.to_string(),
            reason: "not a hierarchical url".into(),
        });
    }
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

impl CatalogClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, NetError> {
        Ok(Self {
            client,
            base: normalize_base(base_url)?,
        })
    }

    fn products_url(&self) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty().push("products");
        }
        url
    }

    fn product_url(&self, id: &str) -> Url {
        let mut url = self.products_url();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.push(id);
        }
        url
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, NetError> {
        let resp = self.send(Method::GET, self.products_url(), None).await?;
        decode(resp).await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, NetError> {
        let resp = self
            .send(Method::POST, self.products_url(), Some(draft))
            .await?;
        decode(resp).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> Result<Product, NetError> {
        let resp = self
            .send(Method::PUT, self.product_url(id), Some(draft))
            .await?;
        decode(resp).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<Acknowledgment, NetError> {
        let resp = self.send(Method::DELETE, self.product_url(id), None).await?;
        decode(resp).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&ProductDraft>,
    ) -> Result<Response, NetError> {
        debug!("{method} {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NetError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }
        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, NetError> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
