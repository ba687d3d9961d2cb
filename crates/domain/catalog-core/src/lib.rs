use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{parse_price, validate_draft, ValidationError};

pub type ProductId = String;

/// A catalog entry as stored and served. `id` is assigned by the document store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
        }
    }

    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }
}

/// Product fields minus `id`. Request body for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Body of the delete acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
}

impl Acknowledgment {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}
