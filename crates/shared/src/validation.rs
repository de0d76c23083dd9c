//! Common validation utilities.

use validator::ValidationError;

/// Validates that a monetary charge amount is a finite, non-negative number.
pub fn validate_charge_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("charge_range");
        err.message = Some("Charge must be a non-negative number".into());
        Err(err)
    }
}

/// Validates that a location name is not blank after trimming.
///
/// Length bounds are enforced separately via `#[validate(length(...))]`;
/// this catches values like `"   "` that pass a length check but normalize
/// to nothing.
pub fn validate_location_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("location_blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
