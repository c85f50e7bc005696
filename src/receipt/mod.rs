//! The pages and API endpoint that show the transfer saved in the session.
//!
//! Every handler here needs a transfer in the session. The pages redirect to
//! the transfer form when there is none, the API responds with 404.

mod api;
mod details_page;
mod receipt_page;

pub use api::get_transaction_data;
pub use details_page::get_details_page;
pub use receipt_page::get_receipt_page;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{AppState, session::SessionStore};

/// The state needed to look up the session's transfer.
#[derive(Debug, Clone)]
pub struct ReceiptState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The store holding each session's transfer.
    pub sessions: SessionStore,
    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    pub local_timezone: String,
}

impl FromRef<AppState> for ReceiptState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            sessions: state.sessions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl FromRef<ReceiptState> for Key {
    fn from_ref(state: &ReceiptState) -> Self {
        state.cookie_key.clone()
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use axum_extra::extract::PrivateCookieJar;
    use rand::{SeedableRng, rngs::StdRng};
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        app_state::create_cookie_key,
        session::{SessionId, SessionStore, set_session_cookie},
        transfer::{TransactionRecord, valid_test_form, validate_transfer},
    };

    use super::ReceiptState;

    pub(crate) const SUBMITTED_AT: OffsetDateTime = datetime!(2025-01-31 12:00:00 UTC);

    pub(crate) fn test_state() -> ReceiptState {
        ReceiptState {
            cookie_key: create_cookie_key("42"),
            sessions: SessionStore::default(),
            local_timezone: "Africa/Lagos".to_owned(),
        }
    }

    pub(crate) fn empty_jar(state: &ReceiptState) -> PrivateCookieJar {
        PrivateCookieJar::new(state.cookie_key.clone())
    }

    /// Save the test transfer in a new session and return the session's cookie jar.
    pub(crate) fn jar_with_record(state: &ReceiptState) -> (PrivateCookieJar, TransactionRecord) {
        let mut rng = StdRng::seed_from_u64(3);
        let session_id = SessionId::generate(&mut rng);
        let record = TransactionRecord::new(
            validate_transfer(&valid_test_form()).unwrap(),
            SUBMITTED_AT,
            &mut rng,
        );
        let expires_at = state
            .sessions
            .insert(session_id.clone(), record.clone(), OffsetDateTime::now_utc())
            .unwrap();

        (
            set_session_cookie(empty_jar(state), &session_id, expires_at),
            record,
        )
    }

    /// A cookie jar for a session the store has never seen.
    pub(crate) fn jar_with_unknown_session(state: &ReceiptState) -> PrivateCookieJar {
        let session_id = SessionId::generate(&mut StdRng::seed_from_u64(99));

        set_session_cookie(
            empty_jar(state),
            &session_id,
            OffsetDateTime::now_utc() + time::Duration::hours(1),
        )
    }
}
