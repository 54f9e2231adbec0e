//! # Validation Module
//!
//! Input validation utilities for catalog mutations.
//!
//! Validation runs before any collection is touched, so a rejected input
//! never leaves a half-applied change behind.

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a material name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_material_name(name: &str) -> ValidationResult<String> {
    validate_name(name, "material name")
}

/// Validates a client name. Same rules as material names.
pub fn validate_client_name(name: &str) -> ValidationResult<String> {
    validate_name(name, "client name")
}

fn validate_name(name: &str, field: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a per-ton price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (rate not yet agreed)
pub fn validate_rate(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_material_name() {
        assert_eq!(validate_material_name("  sand ").unwrap(), "sand");
        assert_eq!(validate_material_name("Άμμος").unwrap(), "Άμμος");

        assert!(validate_material_name("").is_err());
        assert!(validate_material_name("   ").is_err());
        assert!(validate_material_name(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_client_name() {
        assert!(validate_client_name("Athens Constructions").is_ok());
        assert!(validate_client_name("").is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(Money::from_major_minor(12, 0)).is_ok());
        assert!(validate_rate(Money::zero()).is_ok());
        assert!(validate_rate(Money::from_major_minor(-1, 0)).is_err());
    }
}
