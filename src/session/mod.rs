//! Session tracking for simulated transfers.
//!
//! A session is identified by a random ID kept in an encrypted cookie. The
//! session's transaction lives in an in-memory [SessionStore].

mod cookie;
mod store;

pub(crate) use cookie::{COOKIE_SESSION_ID, get_session_id, set_session_cookie};
pub use store::{SESSION_DURATION, SessionId, SessionStore};

use axum_extra::extract::PrivateCookieJar;
use time::OffsetDateTime;

use crate::{Error, transfer::TransactionRecord};

/// Get the transaction for the session in `jar`.
///
/// # Errors
///
/// Returns:
/// - [Error::CookieMissing] if there is no valid session cookie.
/// - [Error::NoTransactionData] if the session has no transaction or it expired.
/// - [Error::SessionLockError] if the store lock is poisoned.
pub(crate) fn get_session_record(
    sessions: &SessionStore,
    jar: &PrivateCookieJar,
    now: OffsetDateTime,
) -> Result<TransactionRecord, Error> {
    let session_id = get_session_id(jar)?;

    sessions
        .get(&session_id, now)?
        .ok_or(Error::NoTransactionData)
}
