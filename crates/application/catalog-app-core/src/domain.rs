pub use catalog_core::{Product, ProductDraft, ProductId};

/// Client-side catalog state for one session.
///
/// `items` keeps the order of the last successful fetch; later successes
/// edit it in place. `loading` only says that some request event was reduced
/// after the latest completion, not how many requests are outstanding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn with_items(items: Vec<Product>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }
}
