//! # Rental Repository
//!
//! Database operations for rental records (the Rental Ledger).
//!
//! ## Append-Mostly
//! Rentals are created only by the Booking Engine's checkout; this
//! repository covers the read paths (renter history, admin ledger) and the
//! one deletion a renter may perform themselves: owner cancel.
//!
//! ## Owner Cancel vs Admin Transition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Admin: set_rental_status(id, Cancelled)   [engine, transactional]     │
//! │    → rental row kept, status = cancelled                               │
//! │    → item released to 'available'                                      │
//! │                                                                         │
//! │  Owner: delete_owned(id, account)          [this repo, single row]     │
//! │    → rental row DELETED                                                │
//! │    → item left as-is (NOT released)                                    │
//! │                                                                         │
//! │  The asymmetry is inherited behavior, kept deliberately and pinned     │
//! │  by a test in engine.rs.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rentora_core::{Rental, RentalAdminView, RentalView};

/// Repository for rental database operations.
#[derive(Debug, Clone)]
pub struct RentalRepository {
    pool: SqlitePool,
}

impl RentalRepository {
    /// Creates a new RentalRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RentalRepository { pool }
    }

    /// Gets a rental by its ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            SELECT id, account_id, item_id, start_date, end_date,
                   total_price, delivery_option, collateral_ref,
                   payment_status, status, created_at
            FROM rentals
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rental)
    }

    /// Lists an account's rentals joined with item details, newest first
    /// (the renter's history page).
    pub async fn list_for_account(&self, account_id: &str) -> DbResult<Vec<RentalView>> {
        let rentals = sqlx::query_as::<_, RentalView>(
            r#"
            SELECT
                r.id, r.start_date, r.end_date, r.total_price,
                r.status, r.delivery_option,
                i.brand, i.model, i.image_ref
            FROM rentals r
            JOIN items i ON r.item_id = i.id
            WHERE r.account_id = ?1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(account_id = %account_id, count = rentals.len(), "Listed rentals");
        Ok(rentals)
    }

    /// Lists every rental joined with item and renter details, newest first
    /// (the admin ledger). Carries the collateral reference so admins can
    /// verify the identity document.
    pub async fn list_all(&self) -> DbResult<Vec<RentalAdminView>> {
        let rentals = sqlx::query_as::<_, RentalAdminView>(
            r#"
            SELECT
                r.id, r.start_date, r.end_date, r.total_price,
                r.status, r.delivery_option, r.collateral_ref,
                i.brand, i.model,
                a.name AS renter_name, a.email AS renter_email
            FROM rentals r
            JOIN items i ON r.item_id = i.id
            JOIN accounts a ON r.account_id = a.id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Deletes a rental owned by the given account (owner cancel).
    ///
    /// Hard delete, scoped to the owner: an id belonging to someone else is
    /// indistinguishable from an unknown id. Does NOT release the item -
    /// see the module docs for the asymmetry with the admin path.
    ///
    /// ## Returns
    /// * `Ok(())` - Row deleted
    /// * `Err(DbError::NotFound)` - Unknown id or not the owner
    pub async fn delete_owned(&self, rental_id: &str, account_id: &str) -> DbResult<()> {
        debug!(rental_id = %rental_id, account_id = %account_id, "Deleting owned rental");

        let result = sqlx::query("DELETE FROM rentals WHERE id = ?1 AND account_id = ?2")
            .bind(rental_id)
            .bind(account_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Rental", rental_id));
        }

        Ok(())
    }

    /// Counts rentals referencing an item (diagnostics).
    pub async fn count_for_item(&self, item_id: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE item_id = ?1")
            .bind(item_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
// Creation goes through the Booking Engine, so these tests drive checkout
// first and then exercise the ledger's read/delete paths.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use rentora_core::{
        AccountRole, CheckoutItem, CheckoutRequest, DeliveryOption, NewItem, RentalStatus,
    };

    async fn setup_with_rental() -> (Database, String, String, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let account = db
            .accounts()
            .insert("Sari", "sari@example.com", AccountRole::Customer)
            .await
            .unwrap();

        let item = db
            .items()
            .insert(&NewItem {
                brand: "Dell".to_string(),
                model: "XPS 13".to_string(),
                specifications: "i5, 16GB RAM".to_string(),
                price_per_day: 120_000,
                image_ref: None,
            })
            .await
            .unwrap();

        let summary = db
            .booking()
            .checkout(&CheckoutRequest {
                account_id: account.id.clone(),
                items: vec![CheckoutItem {
                    item_id: item.id.clone(),
                    price_per_day: 120_000,
                }],
                start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
                delivery_option: DeliveryOption::Pickup,
                collateral_ref: "/uploads/ktp-sari.jpg".to_string(),
                clear_cart: false,
            })
            .await
            .unwrap();

        let rental_id = summary.rental_ids[0].clone();
        (db, account.id, item.id, rental_id)
    }

    #[tokio::test]
    async fn test_get_and_list_for_account() {
        let (db, account_id, item_id, rental_id) = setup_with_rental().await;
        let repo = db.rentals();

        let rental = repo.get(&rental_id).await.unwrap().unwrap();
        assert_eq!(rental.item_id, item_id);
        assert_eq!(rental.status, RentalStatus::Upcoming);
        // 5 inclusive days x 120.000
        assert_eq!(rental.total_price, 600_000);

        let history = repo.list_for_account(&account_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].brand, "Dell");
    }

    #[tokio::test]
    async fn test_admin_ledger_joins_renter() {
        let (db, _, _, _) = setup_with_rental().await;

        let ledger = db.rentals().list_all().await.unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].renter_name, "Sari");
        assert_eq!(ledger[0].renter_email, "sari@example.com");
        assert_eq!(ledger[0].collateral_ref, "/uploads/ktp-sari.jpg");
    }

    #[tokio::test]
    async fn test_delete_owned() {
        let (db, account_id, _, rental_id) = setup_with_rental().await;
        let repo = db.rentals();

        repo.delete_owned(&rental_id, &account_id).await.unwrap();
        assert!(repo.get(&rental_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_owned_wrong_owner_is_not_found() {
        let (db, _, _, rental_id) = setup_with_rental().await;

        let stranger = db
            .accounts()
            .insert("Lain", "lain@example.com", AccountRole::Customer)
            .await
            .unwrap();

        let err = db
            .rentals()
            .delete_owned(&rental_id, &stranger.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        // Rental untouched
        assert!(db.rentals().get(&rental_id).await.unwrap().is_some());
    }
}
