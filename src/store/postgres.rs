use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::{
    ledger::repo_types::{NewTransaction, Transaction, TransactionRow},
    store::Store,
    users::repo_types::User,
};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    /// Connects and applies pending migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run database migrations")?;
        info!(max_connections, "postgres store ready");

        Ok(Self { db })
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, created_at
            FROM users
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        Ok(users)
    }

    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, created_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("get user")?;
        Ok(user)
    }

    async fn create_user(&self, name: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.db)
        .await
        .context("create user")?;
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, name: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET name = $2
            WHERE id = $1
            RETURNING id, name, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.db)
        .await
        .context("update user")?;
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_transactions(&self) -> anyhow::Result<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, kind, amount, occurred_at
            FROM transactions
            ORDER BY occurred_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list transactions")?;
        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn insert_transaction(&self, new: NewTransaction) -> anyhow::Result<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions (kind, amount, occurred_at)
            VALUES ($1, $2, $3)
            RETURNING id, kind, amount, occurred_at
            "#,
        )
        .bind(new.kind.as_str())
        .bind(new.amount.get())
        .bind(new.occurred_at)
        .fetch_one(&self.db)
        .await
        .context("insert transaction")?;
        Transaction::try_from(row)
    }

    async fn clear_transactions(&self) -> anyhow::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM transactions"#)
            .execute(&self.db)
            .await
            .context("clear transactions")?;
        Ok(result.rows_affected())
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
