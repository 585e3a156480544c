//! Account persistence.
//!
//! Handlers talk to an [`AccountStore`] rather than to the pool directly.
//! [`PgAccountStore`] is the PostgreSQL implementation used in production.
//!
//! # Ordering
//!
//! Listing is ordered by `id` ascending. Ids come from a sequence, so this
//! is creation order and stays stable across calls.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    models::{
        account::{Account, AccountFilter, NewAccount},
        pagination::Page,
    },
};

/// Read/write contract for account records.
///
/// Every method is a single statement; nothing spans a transaction.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert one account. The store assigns `id` and `created_at`.
    async fn create(&self, new: NewAccount) -> Result<Account, sqlx::Error>;

    /// Return up to `page.limit` accounts matching `filter` after skipping
    /// `page.skip` of them, by ascending id.
    async fn list(&self, filter: AccountFilter, page: Page) -> Result<Vec<Account>, sqlx::Error>;

    /// Fetch a single account by id.
    async fn get(&self, id: i64) -> Result<Option<Account>, sqlx::Error>;

    /// Check connectivity to the backing store.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed account store.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, new: NewAccount) -> Result<Account, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (user_id, balance)
            VALUES ($1, $2)
            RETURNING id, user_id, balance, created_at
            "#,
        )
        .bind(new.user_id)
        .bind(new.balance)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(account_id = account.id, user_id = account.user_id, "Account inserted");

        Ok(account)
    }

    async fn list(&self, filter: AccountFilter, page: Page) -> Result<Vec<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, balance, created_at
            FROM accounts
            WHERE ($3::BIGINT IS NULL OR user_id = $3)
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.skip)
        .bind(filter.user_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: i64) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, balance, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
