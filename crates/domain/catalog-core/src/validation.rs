//! Client-side checks run before a create or update is dispatched.
//!
//! The server stores whatever it receives, so these are the only guard
//! against empty names and negative prices reaching the catalog.

use crate::ProductDraft;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Price must be a number, got '{0}'")]
    PriceNotNumeric(String),
    #[error("Price must be a finite number")]
    PriceNotFinite,
    #[error("Price cannot be negative ({0})")]
    NegativePrice(f64),
}

pub fn validate_draft(draft: &ProductDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !draft.price.is_finite() {
        return Err(ValidationError::PriceNotFinite);
    }
    if draft.price < 0.0 {
        return Err(ValidationError::NegativePrice(draft.price));
    }
    Ok(())
}

/// Parses user-entered price text. Surrounding whitespace is ignored.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let price: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::PriceNotNumeric(trimmed.to_string()))?;
    if !price.is_finite() {
        return Err(ValidationError::PriceNotFinite);
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(price)
}
