//! Balance derivation and the withdrawal gate.
//!
//! The balance is never stored. It is folded from the full transaction
//! history on every request so it cannot drift from the ledger.

use crate::ledger::{amount::Amount, error::LedgerError, repo_types::Transaction};

/// Signed sum of all deposits minus all withdrawals. Empty history is `+0`.
pub fn calculate_balance(history: &[Transaction]) -> f64 {
    // Fold from +0.0; `Sum for f64` starts at -0.0.
    history
        .iter()
        .fold(0.0, |acc, t| acc + t.signed_amount())
}

/// Admits a withdrawal of `amount` against `balance`. Withdrawing the exact
/// balance is allowed.
pub fn admit_withdrawal(amount: Amount, balance: f64) -> Result<(), LedgerError> {
    if amount.get() > balance {
        return Err(LedgerError::InsufficientFunds {
            requested: amount.get(),
            balance,
        });
    }
    Ok(())
}
