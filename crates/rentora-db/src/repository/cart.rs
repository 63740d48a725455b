//! # Cart Repository
//!
//! Database operations for cart entries (the Cart Store).
//!
//! ## Set Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart = Set of (account, item)                       │
//! │                                                                         │
//! │  add(account, item)                                                    │
//! │       │                                                                 │
//! │       ├── pair exists?  → UniqueViolation (surfaced as 409)            │
//! │       └── else          → INSERT                                       │
//! │                                                                         │
//! │  remove(account, item)  → DELETE, Ok even when the pair is absent      │
//! │                           (idempotent: double-remove is not an error)  │
//! │                                                                         │
//! │  list(account)          → entries joined with LIVE item attributes     │
//! │                           (current price/status - not a quote lock)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use rentora_core::CartLine;

/// Repository for cart database operations.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartRepository { pool }
    }

    /// Adds an item to an account's cart.
    ///
    /// Pre-checks for an existing pair to surface a clean conflict error;
    /// the UNIQUE index on (account_id, item_id) backstops the race where
    /// two adds slip past the check simultaneously.
    ///
    /// ## Returns
    /// * `Ok(())` - Entry added
    /// * `Err(DbError::UniqueViolation)` - Pair already in the cart
    /// * `Err(DbError::ForeignKeyViolation)` - Unknown item or account
    pub async fn add(&self, account_id: &str, item_id: &str) -> DbResult<()> {
        debug!(account_id = %account_id, item_id = %item_id, "Adding cart entry");

        let existing: Option<String> = sqlx::query_scalar(
            "SELECT id FROM cart_entries WHERE account_id = ?1 AND item_id = ?2",
        )
        .bind(account_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        if existing.is_some() {
            return Err(DbError::duplicate("cart entry", item_id));
        }

        sqlx::query(
            r#"
            INSERT INTO cart_entries (id, account_id, item_id, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(account_id)
        .bind(item_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists an account's cart, joined with the live item attributes.
    ///
    /// The join re-reads the item row on every call, so an admin price edit
    /// shows up in the cart immediately - the cart never snapshots a price.
    pub async fn list(&self, account_id: &str) -> DbResult<Vec<CartLine>> {
        let lines = sqlx::query_as::<_, CartLine>(
            r#"
            SELECT
                c.id AS cart_id,
                i.id AS item_id,
                i.brand,
                i.model,
                i.specifications,
                i.price_per_day,
                i.image_ref,
                i.status
            FROM cart_entries c
            JOIN items i ON c.item_id = i.id
            WHERE c.account_id = ?1
            ORDER BY c.created_at
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(account_id = %account_id, count = lines.len(), "Listed cart");
        Ok(lines)
    }

    /// Removes an item from an account's cart.
    ///
    /// Idempotent: removing a pair that is not in the cart succeeds with no
    /// error. The caller cannot tell the difference, which is the point.
    pub async fn remove(&self, account_id: &str, item_id: &str) -> DbResult<()> {
        debug!(account_id = %account_id, item_id = %item_id, "Removing cart entry");

        sqlx::query("DELETE FROM cart_entries WHERE account_id = ?1 AND item_id = ?2")
            .bind(account_id)
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts entries for an account (diagnostics).
    pub async fn count(&self, account_id: &str) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cart_entries WHERE account_id = ?1")
                .bind(account_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
