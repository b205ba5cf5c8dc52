//! Price validation.
//!
//! Prices are stored and transported as text (the source schema is text),
//! but non-empty values must parse as a non-negative fixed-point decimal
//! before they reach the table.

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::error::CoreError;

/// Validate a price string.
///
/// The empty string is accepted: request fields are optional and absent
/// fields map to empty values rather than rejecting the request.
pub fn validate_price(price: &str) -> Result<(), CoreError> {
    if price.is_empty() {
        return Ok(());
    }

    let value = BigDecimal::from_str(price).map_err(|_| {
        CoreError::Validation(format!(
            "Invalid price '{price}': must be a decimal number"
        ))
    })?;

    if value < BigDecimal::zero() {
        return Err(CoreError::Validation(format!(
            "Invalid price '{price}': must not be negative"
        )));
    }

    Ok(())
}
