use crate::ledger::repo_types::TransactionKind;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Amount missing, not a number, or not strictly positive and finite.
    #[error("Invalid {0} amount")]
    InvalidAmount(TransactionKind),

    #[error("Insufficient funds")]
    InsufficientFunds { requested: f64, balance: f64 },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
