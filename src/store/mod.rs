//! Record store holding the user and transaction collections.
//!
//! Handlers only see [`Store`]; the Postgres and in-memory backends are picked
//! once at startup in [`crate::state::AppState::init`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    ledger::repo_types::{NewTransaction, Transaction},
    users::repo_types::User,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// All users in creation order.
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn create_user(&self, name: &str) -> anyhow::Result<User>;
    /// Returns `None` when no user has this id.
    async fn update_user(&self, id: Uuid, name: &str) -> anyhow::Result<Option<User>>;
    /// Returns `false` when no user has this id.
    async fn delete_user(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Full history, newest `occurred_at` first.
    async fn list_transactions(&self) -> anyhow::Result<Vec<Transaction>>;
    async fn insert_transaction(&self, new: NewTransaction) -> anyhow::Result<Transaction>;
    /// Removes every transaction and returns how many were removed.
    async fn clear_transactions(&self) -> anyhow::Result<u64>;

    /// Releases the underlying connections. Called once on shutdown.
    async fn close(&self) {}
}
