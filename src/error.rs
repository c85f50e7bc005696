//! Defines the app level error type and conversions to rendered HTML pages.
use axum::response::{IntoResponse, Redirect, Response};

use crate::{endpoints, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
///
/// Problems with the submitted form are not errors at this level, those are
/// reported as [FieldErrors](crate::transfer::FieldErrors).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The session ID cookie is missing from the cookie jar in the request,
    /// or its value is not a valid session ID.
    #[error("no session cookie in the cookie jar")]
    CookieMissing,

    /// The session has no transaction, either because nothing was submitted
    /// yet or because the session expired.
    #[error("no transaction data found for the session")]
    NoTransactionData,

    /// Could not acquire the session store lock.
    #[error("could not acquire the session store lock")]
    SessionLockError,

    /// Could not acquire the lock on the random number generator.
    #[error("could not acquire the random number generator lock")]
    RngLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // Pages that need a transfer send the user back to the form to make one.
            Error::CookieMissing | Error::NoTransactionData => {
                Redirect::to(endpoints::ROOT).into_response()
            }
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
