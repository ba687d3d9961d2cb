use crate::domain::{Product, ProductDraft, ProductId};

#[derive(Debug, Clone)]
pub enum AppCommand {
    LoadProducts,
    AddProduct(ProductDraft),
    UpdateProduct(Product),
    DeleteProduct(ProductId),
}
