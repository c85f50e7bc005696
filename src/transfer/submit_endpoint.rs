//! Defines the endpoint the transfer form is submitted to.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    app_state::SharedRng,
    endpoints,
    internal_server_error::get_internal_server_error_redirect,
    session::{SessionId, SessionStore, get_session_id, set_session_cookie},
    transfer::{
        TransactionRecord, TransferForm, ValidatedTransfer, form::transfer_form, mask_phone_number,
        validate_transfer,
    },
};

/// The state needed to submit a transfer.
#[derive(Debug, Clone)]
pub struct SubmitTransferState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The store the submitted transaction is saved in.
    pub sessions: SessionStore,
    /// The source of simulated balances, reference numbers and session IDs.
    pub rng: SharedRng,
}

impl FromRef<AppState> for SubmitTransferState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            sessions: state.sessions.clone(),
            rng: state.rng.clone(),
        }
    }
}

impl FromRef<SubmitTransferState> for Key {
    fn from_ref(state: &SubmitTransferState) -> Self {
        state.cookie_key.clone()
    }
}

/// A route handler for submitting a transfer.
///
/// If any field is invalid, the form is rendered again with an error message
/// next to each invalid field. Otherwise the transaction is saved in the
/// session, the confirmation message is logged and the client is redirected
/// to the receipt.
pub async fn submit_transfer_endpoint(
    State(state): State<SubmitTransferState>,
    jar: PrivateCookieJar,
    Form(form): Form<TransferForm>,
) -> Response {
    let transfer = match validate_transfer(&form) {
        Ok(transfer) => transfer,
        Err(errors) => {
            tracing::debug!("rejected transfer with {} invalid fields", errors.len());
            return transfer_form(&form, &errors).into_response();
        }
    };

    match save_transfer(&state, jar, transfer, OffsetDateTime::now_utc()) {
        Ok((jar, record)) => {
            log_sms_simulation(&record);

            (
                StatusCode::SEE_OTHER,
                HxRedirect(endpoints::RECEIPT_VIEW.to_owned()),
                jar,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not save transfer: {error}");
            get_internal_server_error_redirect()
        }
    }
}

/// Create the record for `transfer` and store it in the session, starting a
/// new session if the client does not have one.
///
/// Returns the cookie jar holding the session cookie and the stored record.
fn save_transfer(
    state: &SubmitTransferState,
    jar: PrivateCookieJar,
    transfer: ValidatedTransfer,
    now: OffsetDateTime,
) -> Result<(PrivateCookieJar, TransactionRecord), Error> {
    let (session_id, record) = {
        let mut rng = state.rng.lock()?;
        let session_id =
            get_session_id(&jar).unwrap_or_else(|_| SessionId::generate(&mut *rng));

        (session_id, TransactionRecord::new(transfer, now, &mut *rng))
    };

    let expires_at = state
        .sessions
        .insert(session_id.clone(), record.clone(), now)?;

    Ok((set_session_cookie(jar, &session_id, expires_at), record))
}

fn log_sms_simulation(record: &TransactionRecord) {
    tracing::info!("{}", submission_summary(record));
    tracing::info!("=== SMS SIMULATION ===");
    for line in record.message().lines() {
        tracing::info!("{line}");
    }
    tracing::info!("======================");
}

/// The phone number is masked like the request logs.
fn submission_summary(record: &TransactionRecord) -> String {
    format!(
        "transfer {} submitted, sending alert to {}",
        record.reference_number(),
        mask_phone_number(record.transfer().phone_number())
    )
}
