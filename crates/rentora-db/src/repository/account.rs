//! # Account Repository
//!
//! Minimal account rows. Authentication and token issuance live outside
//! this workspace; this repository exists so rentals and cart entries have
//! something to reference, and so the seed binary and tests can provision
//! demo accounts.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use rentora_core::{Account, AccountRole};

/// Repository for account database operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    /// Creates a new AccountRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AccountRepository { pool }
    }

    /// Inserts an account.
    ///
    /// ## Returns
    /// The full account row with its generated id.
    /// `Err(DbError::UniqueViolation)` if the email is taken.
    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        role: AccountRole,
    ) -> DbResult<Account> {
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            created_at: Utc::now(),
        };

        debug!(id = %account.id, email = %account.email, "Inserting account");

        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, role, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(account.role)
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(account)
    }

    /// Gets an account by its ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, role, created_at FROM accounts WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Counts accounts (seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.accounts();

        let account = repo
            .insert("Budi", "budi@example.com", AccountRole::Customer)
            .await
            .unwrap();

        let fetched = repo.get(&account.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "budi@example.com");
        assert_eq!(fetched.role, AccountRole::Customer);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.accounts();

        repo.insert("Budi", "budi@example.com", AccountRole::Customer)
            .await
            .unwrap();
        let err = repo
            .insert("Badu", "budi@example.com", AccountRole::Customer)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
