use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    dto::MessageResponse,
    error::AppError,
    ledger::{
        dto::{AmountRequest, BalanceResponse},
        error::LedgerError,
        repo_types::{Transaction, TransactionKind},
        services,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/transactions", get(list_transactions))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
        .route("/transactions", delete(clear_transactions))
}

/// A body that is not JSON, or an `amount` that is not a number, is an invalid amount.
fn requested_amount(
    payload: Result<Json<AmountRequest>, JsonRejection>,
    kind: TransactionKind,
) -> Result<f64, LedgerError> {
    payload
        .ok()
        .and_then(|Json(body)| body.number())
        .ok_or(LedgerError::InvalidAmount(kind))
}

#[instrument(skip(state))]
pub async fn get_balance(State(state): State<AppState>) -> Result<Json<BalanceResponse>, AppError> {
    let balance = services::current_balance(state.store.as_ref()).await?;
    Ok(Json(BalanceResponse { balance }))
}

#[instrument(skip(state, payload))]
pub async fn deposit(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let requested = requested_amount(payload, TransactionKind::Deposit)?;
    let tx = services::deposit(state.store.as_ref(), requested).await?;
    Ok(Json(MessageResponse::new(format!("Deposited ${}", tx.amount))))
}

#[instrument(skip(state, payload))]
pub async fn withdraw(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let requested = requested_amount(payload, TransactionKind::Withdrawal)?;
    let tx = services::withdraw(state.store.as_ref(), requested).await?;
    Ok(Json(MessageResponse::new(format!("Withdrew ${}", tx.amount))))
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    Ok(Json(services::history(state.store.as_ref()).await?))
}

#[instrument(skip(state))]
pub async fn clear_transactions(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    services::clear(state.store.as_ref()).await?;
    Ok(Json(MessageResponse::new("All transactions cleared.")))
}
