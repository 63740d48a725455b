//! # rentora-core: Pure Business Logic for Rentora
//!
//! This crate is the **heart** of Rentora, a laptop rental marketplace.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rentora Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Catalog / Admin API (excluded)                 │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout UI ──► Admin UI         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rentora-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │ duration  │  │   rules   │  │   │
//! │  │   │  Rental   │  │  rupiah   │  │   fees    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  rentora-db (Database Layer)                    │   │
//! │  │       SQLite queries, migrations, the Booking Engine            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Rental, CartEntry, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Rental duration and total price calculations
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupiah (i64), no floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rentora_core::money::Money;
//! use rentora_core::pricing::{rental_duration_days, rental_total};
//! use rentora_core::types::DeliveryOption;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
//!
//! // Duration is inclusive of both endpoints: 3 days
//! let days = rental_duration_days(start, end);
//! assert_eq!(days, 3);
//!
//! // 100,000/day × 3 days + flat delivery fee
//! let price = Money::from_rupiah(100_000);
//! let total = rental_total(price, days, DeliveryOption::Delivery);
//! assert_eq!(total.rupiah(), 325_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rentora_core::Money` instead of
// `use rentora_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single checkout
///
/// ## Business Reason
/// Prevents runaway orders; a renter booking more than this many laptops at
/// once should go through a manual business process instead.
pub const MAX_CHECKOUT_ITEMS: usize = 20;

/// Maximum daily rental price in whole rupiah
///
/// ## Business Reason
/// No laptop rents for more than Rp100 million a day; anything above this is
/// a typo or a hostile request. The cap also keeps every computed total
/// (`MAX_PRICE_PER_DAY × MAX_RENTAL_DAYS` plus fees) far inside i64 range,
/// so the pricing multiplication can never overflow on validated input.
pub const MAX_PRICE_PER_DAY: i64 = 100_000_000;

/// Maximum rental duration in days (inclusive count)
///
/// ## Business Reason
/// A rental longer than a year should go through a manual business process.
/// Together with [`MAX_PRICE_PER_DAY`] this bounds every computed total.
pub const MAX_RENTAL_DAYS: i64 = 365;

/// Maximum length of free-text fields (brand, model), in characters
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the specifications text, in characters
pub const MAX_SPEC_LEN: usize = 2000;
