//! Product field rules, checked before anything is stored.

use rust_decimal::Decimal;

use tallybook_core::{DomainError, DomainResult, Money};

/// Minimum length (in characters) of a sku and of a product name.
pub const MIN_TEXT_LEN: usize = 3;

pub fn validate_sku(sku: &str) -> DomainResult<()> {
    if sku.chars().count() < MIN_TEXT_LEN {
        return Err(DomainError::invalid_record(format!(
            "sku must be at least {MIN_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.chars().count() < MIN_TEXT_LEN {
        return Err(DomainError::invalid_record(format!(
            "name must be at least {MIN_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_stock(stock: i64) -> DomainResult<()> {
    if stock < 0 {
        return Err(DomainError::invalid_record("stock cannot be negative"));
    }
    Ok(())
}

pub fn validate_price(price: Money) -> DomainResult<()> {
    if price <= Decimal::ZERO {
        return Err(DomainError::invalid_record("price must be greater than zero"));
    }
    Ok(())
}

/// All registration rules, in order: sku, name, stock, price.
pub fn validate_new_product(sku: &str, name: &str, stock: i64, price: Money) -> DomainResult<()> {
    validate_sku(sku)?;
    validate_name(name)?;
    validate_stock(stock)?;
    validate_price(price)
}
