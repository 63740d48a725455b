//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupiah                                           │
//! │    Rental prices are whole rupiah (IDR carries no minor unit in         │
//! │    day-to-day pricing), so Money is a plain i64 rupiah count.           │
//! │    Addition and multiplication stay exact, always.                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentora_core::money::Money;
//!
//! // Create from rupiah (the only constructor)
//! let price = Money::from_rupiah(150_000); // Rp150.000/day
//!
//! // Arithmetic operations
//! let three_days = price * 3;                       // Rp450.000
//! let with_fee = three_days + Money::from_rupiah(25_000); // Rp475.000
//!
//! // NEVER do this:
//! // let bad = Money::from_float(150000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Item.price_per_day ──► duration × price ──► Rental.total_price        │
/// │                                    │                                    │
/// │                delivery fee ───────┘                                    │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use rentora_core::money::Money;
    ///
    /// let price = Money::from_rupiah(150_000);
    /// assert_eq!(price.rupiah(), 150_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use rentora_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.rupiah(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a day count.
    ///
    /// ## Example
    /// ```rust
    /// use rentora_core::money::Money;
    ///
    /// let per_day = Money::from_rupiah(100_000);
    /// let total = per_day.multiply_days(3);
    /// assert_eq!(total.rupiah(), 300_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Item: ThinkPad X1, Rp100.000/day
    /// Duration: 3 days
    ///      │
    ///      ▼
    /// multiply_days(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Item Total: Rp300.000
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Groups digits Indonesian-style with dots: `Rp1.250.000`.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();

        // Group digits in threes from the right, separated by dots
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        write!(f, "{}Rp{}", sign, grouped)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for day counts).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i32) -> Self {
        Money(self.0 * days as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupiah() {
        let money = Money::from_rupiah(150_000);
        assert_eq!(money.rupiah(), 150_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupiah(150_000)), "Rp150.000");
        assert_eq!(format!("{}", Money::from_rupiah(1_250_000)), "Rp1.250.000");
        assert_eq!(format!("{}", Money::from_rupiah(500)), "Rp500");
        assert_eq!(format!("{}", Money::from_rupiah(-25_000)), "-Rp25.000");
        assert_eq!(format!("{}", Money::from_rupiah(0)), "Rp0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(100_000);
        let b = Money::from_rupiah(25_000);

        assert_eq!((a + b).rupiah(), 125_000);
        assert_eq!((a - b).rupiah(), 75_000);
        let result: Money = a * 3;
        assert_eq!(result.rupiah(), 300_000);
    }

    #[test]
    fn test_multiply_days() {
        let per_day = Money::from_rupiah(100_000);
        let total = per_day.multiply_days(3);
        assert_eq!(total.rupiah(), 300_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_rupiah(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_rupiah(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_abs() {
        let refund = Money::from_rupiah(-25_000);
        assert_eq!(refund.abs().rupiah(), 25_000);
    }
}
