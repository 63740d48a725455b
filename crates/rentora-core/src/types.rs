//! # Domain Types
//!
//! Core domain types used throughout Rentora.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     Rental      │   │    CartEntry    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  brand/model    │   │  item_id (FK)   │   │  account_id     │       │
//! │  │  price_per_day  │   │  date range     │   │  item_id        │       │
//! │  │  status         │   │  status         │   │  (unique pair)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ItemStatus    │   │  RentalStatus   │   │ DeliveryOption  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Available      │   │  Upcoming       │   │  Pickup         │       │
//! │  │  Rented         │   │  Ongoing        │   │  Delivery       │       │
//! │  │  Maintenance    │   │  Completed      │   └─────────────────┘       │
//! │  └─────────────────┘   │  Cancelled      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Status Domains
//! Every status field is a closed sum type with exhaustive matching. Invalid
//! status strings are unrepresentable past the serde boundary, so no call
//! site re-validates them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Status
// =============================================================================

/// Availability state of an inventory item.
///
/// ## Single Source of Truth
/// The status flag approximates "does an active rental reference this item".
/// It is maintained procedurally by the Booking Engine, not by a database
/// constraint; admins may also override it directly (e.g. `Maintenance`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Item can be booked.
    Available,
    /// An active rental references this item.
    Rented,
    /// Pulled from the catalog by an admin (no rental involved).
    Maintenance,
}

impl Default for ItemStatus {
    fn default() -> Self {
        ItemStatus::Available
    }
}

// =============================================================================
// Rental Status
// =============================================================================

/// Lifecycle state of a rental record.
///
/// ## Lifecycle
/// ```text
/// Upcoming ──► Ongoing ──► Completed   (terminal)
///     │                        ▲
///     └──────► Cancelled ──────┘       (terminal)
/// ```
/// Reaching a terminal status releases the rented item back to `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    /// Booked, start date not yet reached.
    Upcoming,
    /// Rental period in progress.
    Ongoing,
    /// Rental finished normally.
    Completed,
    /// Rental cancelled by an admin.
    Cancelled,
}

impl RentalStatus {
    /// Terminal statuses end the rental; the item must be released on entry.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, RentalStatus::Completed | RentalStatus::Cancelled)
    }
}

impl Default for RentalStatus {
    fn default() -> Self {
        RentalStatus::Upcoming
    }
}

// =============================================================================
// Delivery Option
// =============================================================================

/// How the renter receives the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOption {
    /// Renter collects the item themselves (no surcharge).
    Pickup,
    /// Courier delivery, flat fee added per rental row.
    Delivery,
}

// =============================================================================
// Payment Status
// =============================================================================

/// Payment settlement state of a rental.
///
/// Checkout writes `Paid` directly: payment confirmation is simulated at
/// creation time, there is no separate authorization step in this design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting settlement (unused by the checkout path, kept for the schema).
    Pending,
    /// Settled.
    Paid,
}

// =============================================================================
// Item
// =============================================================================

/// A rentable unit of inventory (a laptop).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Manufacturer name shown in the catalog.
    pub brand: String,

    /// Model name shown in the catalog.
    pub model: String,

    /// Free-text hardware specification.
    pub specifications: String,

    /// Rental price per day in whole rupiah.
    pub price_per_day: i64,

    /// Opaque reference to the item photo (resolved by the static-file layer).
    pub image_ref: Option<String>,

    /// Availability state.
    pub status: ItemStatus,

    /// When the item was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Returns the daily price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupiah(self.price_per_day)
    }

    /// Checks if the item can currently be booked.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A (account, item) selection pair.
///
/// Ephemeral: deleted on removal or on successful checkout-from-cart.
/// The pair is unique per account; a UNIQUE index enforces it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CartEntry {
    pub id: String,
    pub account_id: String,
    pub item_id: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A cart entry joined with the live item attributes.
///
/// ## Not a Quote Lock
/// The price and status here are the item's *current* values, re-read at
/// listing time. An admin price edit is visible in the cart immediately.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CartLine {
    /// Cart entry id (for removal).
    pub cart_id: String,
    /// Item id.
    pub item_id: String,
    pub brand: String,
    pub model: String,
    pub specifications: String,
    pub price_per_day: i64,
    pub image_ref: Option<String>,
    pub status: ItemStatus,
}

// =============================================================================
// Rental
// =============================================================================

/// A ledger record binding one account to one item for a date range.
///
/// Immutable except for `status` post-creation. Created only by checkout.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Rental {
    pub id: String,
    pub account_id: String,
    pub item_id: String,
    /// First rental day (inclusive).
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    /// Last rental day (inclusive, end >= start).
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    /// Computed total in whole rupiah (duration × daily price + fees).
    pub total_price: i64,
    pub delivery_option: DeliveryOption,
    /// Opaque reference to the uploaded identity document (mandatory).
    pub collateral_ref: String,
    pub payment_status: PaymentStatus,
    pub status: RentalStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Returns the computed total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_rupiah(self.total_price)
    }
}

/// A rental joined with item attributes, for the renter's history page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct RentalView {
    pub id: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub total_price: i64,
    pub status: RentalStatus,
    pub delivery_option: DeliveryOption,
    pub brand: String,
    pub model: String,
    pub image_ref: Option<String>,
}

/// A rental joined with item and renter details, for the admin ledger.
///
/// Carries the collateral reference so admins can verify the identity
/// document before handing over the item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct RentalAdminView {
    pub id: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub total_price: i64,
    pub status: RentalStatus,
    pub delivery_option: DeliveryOption,
    pub collateral_ref: String,
    pub brand: String,
    pub model: String,
    pub renter_name: String,
    pub renter_email: String,
}

// =============================================================================
// Account
// =============================================================================

/// Role of an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Regular renter.
    Customer,
    /// Inventory and ledger administrator.
    Admin,
}

/// An account holder.
///
/// Deliberately minimal: authentication and token issuance live outside this
/// workspace. Rentals and cart entries reference accounts, and the admin
/// ledger joins renter name/email - that is all this type exists for.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Boundary Input Types
// =============================================================================
// Each write operation has an explicit input struct with required/optional
// fields stated, validated once at the boundary (see validation.rs) before
// entering the Booking Engine. No duck-typed request bodies.

/// One item line in a checkout request.
///
/// The daily price rides in with the request as the client's quote and is
/// validated positive; the checkout does not re-read it from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutItem {
    pub item_id: String,
    pub price_per_day: i64,
}

/// Input for `BookingEngine::checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutRequest {
    pub account_id: String,
    pub items: Vec<CheckoutItem>,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub delivery_option: DeliveryOption,
    /// Reference to the uploaded identity document. Mandatory: checkout is
    /// rejected without collateral.
    pub collateral_ref: String,
    /// Delete the account's cart entries on success (checkout-from-cart).
    pub clear_cart: bool,
}

/// Input for creating an inventory item (admin).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewItem {
    pub brand: String,
    pub model: String,
    pub specifications: String,
    pub price_per_day: i64,
    pub image_ref: Option<String>,
}

/// Input for editing an inventory item (admin).
///
/// `image_ref = None` means "keep the existing photo", mirroring an upload
/// form where the file input was left empty.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemUpdate {
    pub brand: String,
    pub model: String,
    pub specifications: String,
    pub price_per_day: i64,
    pub image_ref: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_default() {
        assert_eq!(ItemStatus::default(), ItemStatus::Available);
    }

    #[test]
    fn test_rental_status_default() {
        assert_eq!(RentalStatus::default(), RentalStatus::Upcoming);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!RentalStatus::Upcoming.is_terminal());
        assert!(!RentalStatus::Ongoing.is_terminal());
        assert!(RentalStatus::Completed.is_terminal());
        assert!(RentalStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Maintenance).unwrap(),
            "\"maintenance\""
        );
        assert_eq!(
            serde_json::to_string(&RentalStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
        assert_eq!(
            serde_json::from_str::<DeliveryOption>("\"delivery\"").unwrap(),
            DeliveryOption::Delivery
        );
    }
}
