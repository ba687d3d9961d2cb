use crate::domain::{Product, ProductDraft, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    // Fetch
    FetchRequested,
    FetchSucceeded(Vec<Product>),
    FetchFailed(String),

    // Add
    AddRequested(ProductDraft),
    AddSucceeded(Product),
    AddFailed(String),

    // Update
    UpdateRequested(Product),
    UpdateSucceeded(Product),
    UpdateFailed(String),

    // Delete
    DeleteRequested(ProductId),
    DeleteSucceeded(ProductId),
    DeleteFailed(String),
}
