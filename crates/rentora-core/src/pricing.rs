//! # Pricing Module
//!
//! Rental duration and total price calculations.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       How a Rental is Priced                            │
//! │                                                                         │
//! │  start = 2025-01-01, end = 2025-01-03                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  duration = days(end - start) + 1 = 3   (both endpoints count)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  item_total = duration × price_per_day                                 │
//! │       │                                                                 │
//! │       ├── pickup   → item_total                                        │
//! │       └── delivery → item_total + Rp25.000                             │
//! │                                                                         │
//! │  The delivery fee is flat and applied ONCE PER RENTAL ROW, not once    │
//! │  per order: an order of 3 items with delivery pays the fee 3 times.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::DeliveryOption;

/// Flat courier surcharge, charged per rental row when delivery is chosen.
pub const DELIVERY_FEE: Money = Money::from_rupiah(25_000);

/// Number of rental days spanned, inclusive of both endpoints.
///
/// ## Example
/// ```rust
/// use rentora_core::pricing::rental_duration_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// assert_eq!(rental_duration_days(start, end), 3);
///
/// // A one-day rental (start == end) counts as 1 day
/// assert_eq!(rental_duration_days(start, start), 1);
/// ```
#[inline]
pub fn rental_duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Total price for one rental row.
///
/// `duration × price_per_day`, plus the flat [`DELIVERY_FEE`] when the
/// delivery option is chosen.
///
/// Inputs are bounded at the validation boundary ([`crate::MAX_PRICE_PER_DAY`],
/// [`crate::MAX_RENTAL_DAYS`]), which keeps the product inside i64 range.
///
/// ## Example
/// ```rust
/// use rentora_core::money::Money;
/// use rentora_core::pricing::rental_total;
/// use rentora_core::types::DeliveryOption;
///
/// let per_day = Money::from_rupiah(100_000);
/// assert_eq!(rental_total(per_day, 3, DeliveryOption::Pickup).rupiah(), 300_000);
/// assert_eq!(rental_total(per_day, 3, DeliveryOption::Delivery).rupiah(), 325_000);
/// ```
pub fn rental_total(price_per_day: Money, duration_days: i64, delivery: DeliveryOption) -> Money {
    let base = price_per_day.multiply_days(duration_days);
    match delivery {
        DeliveryOption::Pickup => base,
        DeliveryOption::Delivery => base + DELIVERY_FEE,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duration_inclusive_of_both_endpoints() {
        assert_eq!(rental_duration_days(date(2025, 1, 1), date(2025, 1, 3)), 3);
        assert_eq!(rental_duration_days(date(2025, 1, 1), date(2025, 1, 1)), 1);
        assert_eq!(rental_duration_days(date(2025, 1, 31), date(2025, 2, 1)), 2);
    }

    #[test]
    fn test_duration_across_year_boundary() {
        assert_eq!(
            rental_duration_days(date(2024, 12, 30), date(2025, 1, 2)),
            4
        );
    }

    #[test]
    fn test_pickup_total() {
        let total = rental_total(Money::from_rupiah(100_000), 3, DeliveryOption::Pickup);
        assert_eq!(total.rupiah(), 300_000);
    }

    #[test]
    fn test_delivery_adds_flat_fee() {
        let total = rental_total(Money::from_rupiah(100_000), 3, DeliveryOption::Delivery);
        assert_eq!(total.rupiah(), 325_000);
    }

    #[test]
    fn test_one_day_delivery() {
        let total = rental_total(Money::from_rupiah(75_000), 1, DeliveryOption::Delivery);
        assert_eq!(total.rupiah(), 100_000);
    }

    #[test]
    fn test_bounded_worst_case_stays_in_range() {
        // The validation caps guarantee price <= MAX_PRICE_PER_DAY and
        // duration <= MAX_RENTAL_DAYS; the largest total they admit must
        // compute without wrapping.
        let total = rental_total(
            Money::from_rupiah(crate::MAX_PRICE_PER_DAY),
            crate::MAX_RENTAL_DAYS,
            DeliveryOption::Delivery,
        );
        assert_eq!(
            total.rupiah(),
            crate::MAX_PRICE_PER_DAY * crate::MAX_RENTAL_DAYS + DELIVERY_FEE.rupiah()
        );
        assert!(total.is_positive());
    }
}
