//! # Validation Module
//!
//! Input validation rules for Aurum POS.
//!
//! ## Validation Strategy
//! ```text
//! Layer 1: UI             - basic format checks, immediate feedback
//! Layer 2: THIS MODULE    - business rule validation, typed errors
//! Layer 3: Database       - NOT NULL / UNIQUE / FK constraints
//!
//! Defense in depth: each layer catches different mistakes. Everything
//! here runs locally, before any external call, so a failure always
//! leaves user input intact.
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::validation::{validate_customer_name, validate_gst_bps};
//!
//! validate_customer_name("Meena Kumari").unwrap();
//! validate_gst_bps(300).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a category name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "category name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "category name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the daily gold rate in paise per gram.
///
/// ## Rules
/// - Must be positive; a zero gold rate is always a settings mistake
pub fn validate_gold_rate_paise(paise: i64) -> ValidationResult<()> {
    if paise <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "gold rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a seikuli (labor) rate in paise per gram.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (no labor charge)
pub fn validate_seikuli_rate_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::OutOfRange {
            field: "seikuli rate".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a GST rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - In practice gold GST sits around 300 bps (3%)
pub fn validate_gst_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "gst rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Meena Kumari").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category_name() {
        assert!(validate_category_name("Ring").is_ok());
        assert!(validate_category_name("").is_err());
        assert!(validate_category_name(&"A".repeat(150)).is_err());
    }

    #[test]
    fn test_validate_gold_rate() {
        assert!(validate_gold_rate_paise(600_000).is_ok());
        assert!(validate_gold_rate_paise(0).is_err());
        assert!(validate_gold_rate_paise(-1).is_err());
    }

    #[test]
    fn test_validate_seikuli_rate() {
        assert!(validate_seikuli_rate_paise(20_000).is_ok());
        assert!(validate_seikuli_rate_paise(0).is_ok());
        assert!(validate_seikuli_rate_paise(-100).is_err());
    }

    #[test]
    fn test_validate_gst_bps() {
        assert!(validate_gst_bps(0).is_ok());
        assert!(validate_gst_bps(300).is_ok());
        assert!(validate_gst_bps(10000).is_ok());
        assert!(validate_gst_bps(10001).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
