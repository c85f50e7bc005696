//! Defines the JSON endpoint for the session's transfer.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use serde_json::json;
use time::OffsetDateTime;

use crate::{Error, receipt::ReceiptState, session::get_session_record};

/// A route handler that returns the session's transfer as JSON.
///
/// Responds with 404 and `{"error": "No transaction data found"}` if the
/// session has no transfer.
pub async fn get_transaction_data(
    State(state): State<ReceiptState>,
    jar: PrivateCookieJar,
) -> Response {
    match get_session_record(&state.sessions, &jar, OffsetDateTime::now_utc()) {
        Ok(record) => Json(record).into_response(),
        Err(Error::CookieMissing | Error::NoTransactionData) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No transaction data found" })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("could not get transaction data: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
