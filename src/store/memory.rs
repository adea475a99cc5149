use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    ledger::repo_types::{NewTransaction, Transaction},
    store::Store,
    users::repo_types::User,
};

/// Process-local store. Both collections are kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, name: &str) -> anyhow::Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, name: &str) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.name = name.to_owned();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn list_transactions(&self) -> anyhow::Result<Vec<Transaction>> {
        // Reverse first so the stable sort keeps later inserts ahead on ties.
        let mut history: Vec<Transaction> =
            self.transactions.read().await.iter().rev().cloned().collect();
        history.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(history)
    }

    async fn insert_transaction(&self, new: NewTransaction) -> anyhow::Result<Transaction> {
        let tx = Transaction {
            id: Uuid::new_v4(),
            kind: new.kind,
            amount: new.amount,
            occurred_at: new.occurred_at,
        };
        self.transactions.write().await.push(tx.clone());
        Ok(tx)
    }

    async fn clear_transactions(&self) -> anyhow::Result<u64> {
        let mut transactions = self.transactions.write().await;
        let removed = transactions.len() as u64;
        transactions.clear();
        Ok(removed)
    }
}
