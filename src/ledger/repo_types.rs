use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ledger::amount::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            other => anyhow::bail!("unknown transaction kind {other:?}"),
        }
    }
}

/// Persisted ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Amount,
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

impl Transaction {
    /// `+amount` for deposits, `-amount` for withdrawals.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Deposit => self.amount.get(),
            TransactionKind::Withdrawal => -self.amount.get(),
        }
    }
}

/// Entry accepted by the ledger but not yet stored; the store assigns the id.
#[derive(Debug, Clone, Copy)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub occurred_at: OffsetDateTime,
}

impl NewTransaction {
    pub fn now(kind: TransactionKind, amount: Amount) -> Self {
        Self {
            kind,
            amount,
            occurred_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct TransactionRow {
    pub id: Uuid,
    pub kind: String,
    pub amount: f64,
    pub occurred_at: OffsetDateTime,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = anyhow::Error;

    fn try_from(r: TransactionRow) -> Result<Self, Self::Error> {
        let amount = Amount::new(r.amount)
            .ok_or_else(|| anyhow::anyhow!("transaction {} has invalid amount {}", r.id, r.amount))?;
        Ok(Self {
            id: r.id,
            kind: r.kind.parse()?,
            amount,
            occurred_at: r.occurred_at,
        })
    }
}
