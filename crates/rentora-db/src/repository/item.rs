//! # Item Repository
//!
//! Database operations for inventory items (the Inventory Store).
//!
//! ## Key Operations
//! - Catalog listing (public: available only; admin: everything)
//! - CRUD for admin inventory management
//! - Status override (the manual escape hatch)
//!
//! ## Status Is Engine Territory
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Who Writes Item.status?                                 │
//! │                                                                         │
//! │  Booking Engine (inside transactions):                                 │
//! │    checkout            → 'rented'                                      │
//! │    terminal transition → 'available'                                   │
//! │                                                                         │
//! │  Admin (single-row, via set_status here):                              │
//! │    manual override     → any of the three states, bypassing the        │
//! │                          ledger entirely (e.g. 'maintenance')          │
//! │                                                                         │
//! │  Nothing else touches the column.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use rentora_core::{Item, ItemStatus, ItemUpdate, NewItem};

/// Repository for inventory item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// // Public catalog
/// let available = repo.list_available().await?;
///
/// // Get by ID
/// let item = repo.get("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new inventory item (admin create).
    ///
    /// Input is assumed validated at the boundary (`NewItem::validate`).
    /// The item starts life `available`.
    ///
    /// ## Returns
    /// The full item row with its generated id and timestamp.
    pub async fn insert(&self, new_item: &NewItem) -> DbResult<Item> {
        let item = Item {
            id: Uuid::new_v4().to_string(),
            brand: new_item.brand.trim().to_string(),
            model: new_item.model.trim().to_string(),
            specifications: new_item.specifications.trim().to_string(),
            price_per_day: new_item.price_per_day,
            image_ref: new_item.image_ref.clone(),
            status: ItemStatus::Available,
            created_at: Utc::now(),
        };

        debug!(id = %item.id, brand = %item.brand, model = %item.model, "Inserting item");

        sqlx::query(
            r#"
            INSERT INTO items (
                id, brand, model, specifications,
                price_per_day, image_ref, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&item.id)
        .bind(&item.brand)
        .bind(&item.model)
        .bind(&item.specifications)
        .bind(item.price_per_day)
        .bind(&item.image_ref)
        .bind(item.status)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get(&self, id: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, brand, model, specifications,
                   price_per_day, image_ref, status, created_at
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists items currently open for booking (the public catalog).
    pub async fn list_available(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, brand, model, specifications,
                   price_per_day, image_ref, status, created_at
            FROM items
            WHERE status = 'available'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed available items");
        Ok(items)
    }

    /// Lists every item regardless of status (admin inventory view),
    /// newest first.
    pub async fn list_all(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, brand, model, specifications,
                   price_per_day, image_ref, status, created_at
            FROM items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Updates an item's editable fields (admin edit).
    ///
    /// The image reference is replaced only when the update carries a new
    /// one; `None` keeps the existing photo.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Item doesn't exist
    pub async fn update(&self, id: &str, update: &ItemUpdate) -> DbResult<()> {
        debug!(id = %id, "Updating item");

        let result = match &update.image_ref {
            Some(image_ref) => {
                sqlx::query(
                    r#"
                    UPDATE items SET
                        brand = ?2,
                        model = ?3,
                        specifications = ?4,
                        price_per_day = ?5,
                        image_ref = ?6
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(update.brand.trim())
                .bind(update.model.trim())
                .bind(update.specifications.trim())
                .bind(update.price_per_day)
                .bind(image_ref)
                .execute(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE items SET
                        brand = ?2,
                        model = ?3,
                        specifications = ?4,
                        price_per_day = ?5
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(update.brand.trim())
                .bind(update.model.trim())
                .bind(update.specifications.trim())
                .bind(update.price_per_day)
                .execute(&self.pool)
                .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Sets an item's status directly (single-row write).
    ///
    /// Used by the admin override path (`BookingEngine::set_item_status`).
    /// The engine's transactional paths write the column themselves so the
    /// change commits atomically with the rental rows.
    ///
    /// ## Returns
    /// * `Ok(())` - Status updated
    /// * `Err(DbError::NotFound)` - Item doesn't exist
    pub async fn set_status(&self, id: &str, status: ItemStatus) -> DbResult<()> {
        debug!(id = %id, status = ?status, "Setting item status");

        let result = sqlx::query("UPDATE items SET status = ?2 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    /// Counts total items (seed guard and diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
