use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::ledger::error::LedgerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid user payload")]
    InvalidUser,

    /// Store or connectivity failure. Details are logged, never returned.
    #[error("Internal server error")]
    Store(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Ledger(LedgerError::Store(_)) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Ledger(_) | AppError::InvalidUser => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Ledger(LedgerError::Store(e)) | AppError::Store(e) => {
                error!(error = ?e, "store failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
