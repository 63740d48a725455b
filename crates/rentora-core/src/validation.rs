//! # Validation Module
//!
//! Input validation utilities for Rentora.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API boundary (Rust)                                          │
//! │  ├── Type validation (deserialization, closed status enums)            │
//! │  └── THIS MODULE: validate() once, before the Booking Engine           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints                                                │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use rentora_core::validation::{validate_name, validate_price_per_day};
//!
//! // Validate brand before database insert
//! validate_name("brand", "Lenovo").unwrap();
//!
//! // Validate daily price
//! validate_price_per_day(150_000).unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{CheckoutRequest, ItemUpdate, NewItem};
use crate::{MAX_CHECKOUT_ITEMS, MAX_NAME_LEN, MAX_PRICE_PER_DAY, MAX_RENTAL_DAYS, MAX_SPEC_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a short name field (brand, model).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters (counted as chars, not bytes, so
///   multibyte names are not penalized)
///
/// ## Example
/// ```rust
/// use rentora_core::validation::validate_name;
///
/// assert!(validate_name("brand", "Lenovo").is_ok());
/// assert!(validate_name("brand", "").is_err());
/// assert!(validate_name("brand", &"A".repeat(200)).is_err());
/// ```
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the free-text specifications field.
///
/// ## Rules
/// - Must not be empty (the catalog card renders it)
/// - Must be at most 2000 characters (chars, not bytes)
pub fn validate_specifications(spec: &str) -> ValidationResult<()> {
    let spec = spec.trim();

    if spec.is_empty() {
        return Err(ValidationError::Required {
            field: "specifications".to_string(),
        });
    }

    if spec.chars().count() > MAX_SPEC_LEN {
        return Err(ValidationError::TooLong {
            field: "specifications".to_string(),
            max: MAX_SPEC_LEN,
        });
    }

    Ok(())
}

/// Validates an opaque reference string (collateral document, image path).
///
/// The core never reads the referenced bytes; it only requires the
/// reference to be present.
pub fn validate_ref(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily rental price in rupiah.
///
/// ## Rules
/// - Must be positive (> 0); free rentals are not a thing here
/// - Must be at most [`MAX_PRICE_PER_DAY`]; together with the duration cap
///   this keeps every computed total inside i64 range, so the pricing
///   multiplication downstream cannot overflow on validated input
///
/// ## Example
/// ```rust
/// use rentora_core::validation::validate_price_per_day;
///
/// assert!(validate_price_per_day(150_000).is_ok());
/// assert!(validate_price_per_day(0).is_err());
/// assert!(validate_price_per_day(-100).is_err());
/// assert!(validate_price_per_day(i64::MAX / 2).is_err());
/// ```
pub fn validate_price_per_day(rupiah: i64) -> ValidationResult<()> {
    if rupiah <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price_per_day".to_string(),
        });
    }

    if rupiah > MAX_PRICE_PER_DAY {
        return Err(ValidationError::OutOfRange {
            field: "price_per_day".to_string(),
            min: 1,
            max: MAX_PRICE_PER_DAY,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a rental date range.
///
/// ## Rules
/// - end >= start (both inclusive; start == end is a one-day rental)
/// - spans at most [`MAX_RENTAL_DAYS`] inclusive days
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Checkout: pick dates                                                  │
/// │                                                                         │
/// │  User picks: 2025-01-05 → 2025-01-01                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_date_range(...) ← THIS FUNCTION                              │
/// │       │                                                                 │
/// │       └── end < start → Error: "end date is before start date"         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end < start {
        return Err(ValidationError::InvertedDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let duration = (end - start).num_days() + 1;
    if duration > MAX_RENTAL_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "rental_days".to_string(),
            min: 1,
            max: MAX_RENTAL_DAYS,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use rentora_core::validation::validate_uuid;
///
/// assert!(validate_uuid("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("id", "not-a-uuid").is_err());
/// ```
pub fn validate_uuid(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Boundary Input Validation
// =============================================================================
// One validate() per input struct, called once at the boundary. After this
// returns Ok, the Booking Engine trusts the input shape completely.

impl CheckoutRequest {
    /// Validates the whole checkout request before any I/O.
    ///
    /// ## Checks
    /// - account id present and well-formed
    /// - at least one item, at most [`MAX_CHECKOUT_ITEMS`]
    /// - every item id well-formed, every daily price positive and at most
    ///   [`MAX_PRICE_PER_DAY`]
    /// - end date >= start date, spanning at most [`MAX_RENTAL_DAYS`] days
    /// - collateral reference present (mandatory, checkout rejected without it)
    pub fn validate(&self) -> ValidationResult<()> {
        validate_uuid("account_id", &self.account_id)?;

        if self.items.is_empty() {
            return Err(ValidationError::Empty {
                field: "items".to_string(),
            });
        }

        if self.items.len() > MAX_CHECKOUT_ITEMS {
            return Err(ValidationError::OutOfRange {
                field: "items".to_string(),
                min: 1,
                max: MAX_CHECKOUT_ITEMS as i64,
            });
        }

        for item in &self.items {
            validate_uuid("item_id", &item.item_id)?;
            validate_price_per_day(item.price_per_day)?;
        }

        validate_date_range(self.start_date, self.end_date)?;
        validate_ref("collateral_ref", &self.collateral_ref)?;

        Ok(())
    }
}

impl NewItem {
    /// Validates an item-creation form.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("brand", &self.brand)?;
        validate_name("model", &self.model)?;
        validate_specifications(&self.specifications)?;
        validate_price_per_day(self.price_per_day)?;

        if let Some(image_ref) = &self.image_ref {
            validate_ref("image_ref", image_ref)?;
        }

        Ok(())
    }
}

impl ItemUpdate {
    /// Validates an item-edit form. Same rules as creation; a `None`
    /// image_ref means "keep the existing photo" and is always valid.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("brand", &self.brand)?;
        validate_name("model", &self.model)?;
        validate_specifications(&self.specifications)?;
        validate_price_per_day(self.price_per_day)?;

        if let Some(image_ref) = &self.image_ref {
            validate_ref("image_ref", image_ref)?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CheckoutItem, DeliveryOption};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_request() -> CheckoutRequest {
        CheckoutRequest {
            account_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            items: vec![CheckoutItem {
                item_id: "650e8400-e29b-41d4-a716-446655440000".to_string(),
                price_per_day: 100_000,
            }],
            start_date: date(2025, 1, 1),
            end_date: date(2025, 1, 3),
            delivery_option: DeliveryOption::Pickup,
            collateral_ref: "/uploads/ktp-123.jpg".to_string(),
            clear_cart: false,
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("brand", "Lenovo").is_ok());
        assert!(validate_name("brand", "  ").is_err());
        assert!(validate_name("brand", &"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_specifications() {
        assert!(validate_specifications("i7, 16GB RAM, RTX 4060").is_ok());
        assert!(validate_specifications("").is_err());
        assert!(validate_specifications(&"x".repeat(3000)).is_err());
    }

    #[test]
    fn test_validate_price_per_day() {
        assert!(validate_price_per_day(150_000).is_ok());
        assert!(validate_price_per_day(0).is_err());
        assert!(validate_price_per_day(-1).is_err());
    }

    #[test]
    fn test_price_per_day_capped() {
        assert!(validate_price_per_day(MAX_PRICE_PER_DAY).is_ok());
        assert!(matches!(
            validate_price_per_day(MAX_PRICE_PER_DAY + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_price_per_day(i64::MAX / 2).is_err());
    }

    #[test]
    fn test_name_limit_counts_chars_not_bytes() {
        // 60 chars, 120 bytes: must pass a 100-character limit
        let multibyte = "é".repeat(60);
        assert!(validate_name("model", &multibyte).is_ok());
        assert!(validate_name("model", &"é".repeat(101)).is_err());
        assert!(validate_specifications(&"é".repeat(2000)).is_ok());
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range(date(2025, 1, 1), date(2025, 1, 3)).is_ok());
        assert!(validate_date_range(date(2025, 1, 1), date(2025, 1, 1)).is_ok());
        assert!(validate_date_range(date(2025, 1, 5), date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_date_range_capped_at_one_year() {
        // 365 inclusive days: 2025-01-01 → 2025-12-31
        assert!(validate_date_range(date(2025, 1, 1), date(2025, 12, 31)).is_ok());
        assert!(matches!(
            validate_date_range(date(2025, 1, 1), date(2026, 1, 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("id", "").is_err());
        assert!(validate_uuid("id", "not-a-uuid").is_err());
    }

    #[test]
    fn test_checkout_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_checkout_rejects_empty_items() {
        let mut req = valid_request();
        req.items.clear();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn test_checkout_rejects_missing_collateral() {
        let mut req = valid_request();
        req.collateral_ref = "  ".to_string();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_checkout_rejects_inverted_dates() {
        let mut req = valid_request();
        req.start_date = date(2025, 1, 5);
        req.end_date = date(2025, 1, 1);
        assert!(matches!(
            req.validate(),
            Err(ValidationError::InvertedDateRange { .. })
        ));
    }

    #[test]
    fn test_checkout_rejects_extreme_price() {
        // An extreme quote must die here, before the pricing multiply
        let mut req = valid_request();
        req.items[0].price_per_day = i64::MAX / 2;
        assert!(matches!(
            req.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_checkout_rejects_nonpositive_price() {
        let mut req = valid_request();
        req.items[0].price_per_day = 0;
        assert!(matches!(
            req.validate(),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_new_item_validation() {
        let item = NewItem {
            brand: "Lenovo".to_string(),
            model: "ThinkPad X1".to_string(),
            specifications: "i7, 16GB RAM".to_string(),
            price_per_day: 150_000,
            image_ref: None,
        };
        assert!(item.validate().is_ok());

        let bad = NewItem {
            price_per_day: 0,
            ..item
        };
        assert!(bad.validate().is_err());
    }
}
