use catalog_core::Product;

use crate::StorageError;

pub fn encode_product(product: &Product) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(product)?)
}

pub fn decode_product(bytes: &[u8]) -> Result<Product, StorageError> {
    Ok(serde_json::from_slice(bytes)?)
}
