use tracing::{info, warn};

use crate::{
    ledger::{
        amount::Amount,
        balance::{admit_withdrawal, calculate_balance},
        error::LedgerError,
        repo_types::{NewTransaction, Transaction, TransactionKind},
    },
    store::Store,
};

/// Folds the whole history; nothing is cached between requests.
pub async fn current_balance(store: &dyn Store) -> Result<f64, LedgerError> {
    let history = store.list_transactions().await?;
    Ok(calculate_balance(&history))
}

pub async fn deposit(store: &dyn Store, requested: f64) -> Result<Transaction, LedgerError> {
    let amount =
        Amount::new(requested).ok_or(LedgerError::InvalidAmount(TransactionKind::Deposit))?;

    // The balance must stay a finite JSON number.
    let balance = current_balance(store).await?;
    if !(balance + amount.get()).is_finite() {
        warn!(%amount, balance, "deposit rejected: balance would overflow");
        return Err(LedgerError::InvalidAmount(TransactionKind::Deposit));
    }

    let tx = store
        .insert_transaction(NewTransaction::now(TransactionKind::Deposit, amount))
        .await?;
    info!(tx_id = %tx.id, %amount, "deposit accepted");
    Ok(tx)
}

/// Reads the balance and inserts the withdrawal as two separate store round
/// trips. Concurrent withdrawals can both pass the check against the same
/// balance.
pub async fn withdraw(store: &dyn Store, requested: f64) -> Result<Transaction, LedgerError> {
    let amount =
        Amount::new(requested).ok_or(LedgerError::InvalidAmount(TransactionKind::Withdrawal))?;

    let balance = current_balance(store).await?;
    if let Err(e) = admit_withdrawal(amount, balance) {
        if let LedgerError::InsufficientFunds { requested, balance } = &e {
            warn!(requested, balance, "withdrawal rejected: insufficient funds");
        }
        return Err(e);
    }

    let tx = store
        .insert_transaction(NewTransaction::now(TransactionKind::Withdrawal, amount))
        .await?;
    info!(tx_id = %tx.id, %amount, balance_before = balance, "withdrawal accepted");
    Ok(tx)
}

pub async fn history(store: &dyn Store) -> Result<Vec<Transaction>, LedgerError> {
    Ok(store.list_transactions().await?)
}

pub async fn clear(store: &dyn Store) -> Result<u64, LedgerError> {
    let removed = store.clear_transactions().await?;
    info!(removed, "ledger cleared");
    Ok(removed)
}
