use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects zero, negative and NaN amounts.
pub fn validate_positive_amount(field_name: &str, amount: f64) -> Result<()> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(DemoError::invalid_argument(
            field_name,
            amount,
            "amount must be positive",
        ));
    }
    Ok(())
}

/// Rejects amounts above `limit`, and NaN since it compares false against any limit.
pub fn validate_within_limit(field_name: &str, amount: f64, limit: f64) -> Result<()> {
    if amount.is_nan() || amount > limit {
        return Err(DemoError::invalid_argument(
            field_name,
            amount,
            format!("insufficient funds: amount exceeds balance of {}", limit),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(DemoError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("value must be zero or greater, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
