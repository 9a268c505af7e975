use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A uniquely-named priced record in the catalog.
///
/// `name` is the identity: the store compares names case-insensitively, so
/// no two medicines may differ only in casing. The stored name keeps the
/// casing the caller supplied; it is display data as much as identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub price: f64,
}

impl Medicine {
    /// Build a validated medicine. Trims the name and rejects empty names
    /// and non-finite or negative prices.
    pub fn new(name: &str, price: f64) -> StoreResult<Self> {
        let name = validate_name(name)?;
        validate_price(price)?;
        Ok(Self { name, price })
    }

    /// Lowercased name, the form every lookup compares against.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Trim surrounding whitespace and reject empty names.
pub fn validate_name(name: &str) -> StoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::invalid_input("name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Prices must be finite and non-negative. NaN and the infinities are
/// representable in `f64` but meaningless as a price.
pub fn validate_price(price: f64) -> StoreResult<()> {
    if !price.is_finite() {
        return Err(StoreError::invalid_input("price must be a number"));
    }
    if price < 0.0 {
        return Err(StoreError::invalid_input("price cannot be negative"));
    }
    Ok(())
}
