//! Defines functions for tracking a session with an encrypted cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::OffsetDateTime;

use crate::{Error, session::SessionId};

pub(crate) const COOKIE_SESSION_ID: &str = "session_id";

/// Add the session cookie to the cookie jar, expiring at `expiry`.
///
/// Returns the cookie jar with the cookie added.
pub(crate) fn set_session_cookie(
    jar: PrivateCookieJar,
    session_id: &SessionId,
    expiry: OffsetDateTime,
) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION_ID, session_id.as_str().to_owned()))
            .expires(expiry)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Get the session ID from the session cookie.
///
/// # Errors
///
/// Returns [Error::CookieMissing] if the cookie is missing or does not
/// contain a valid session ID.
pub(crate) fn get_session_id(jar: &PrivateCookieJar) -> Result<SessionId, Error> {
    jar.get(COOKIE_SESSION_ID)
        .and_then(|cookie| SessionId::parse(cookie.value_trimmed()))
        .ok_or(Error::CookieMissing)
}

#[cfg(test)]
mod cookie_tests {
    use axum_extra::extract::{PrivateCookieJar, cookie::Cookie};
    use rand::{SeedableRng, rngs::StdRng};
    use time::macros::datetime;

    use crate::{Error, app_state::create_cookie_key, session::SessionId};

    use super::{COOKIE_SESSION_ID, get_session_id, set_session_cookie};

    fn test_jar() -> PrivateCookieJar {
        PrivateCookieJar::new(create_cookie_key("42"))
    }

    #[test]
    fn can_get_session_id_after_setting_cookie() {
        let session_id = SessionId::generate(&mut StdRng::seed_from_u64(0));
        let expiry = datetime!(2025-02-01 12:00:00 UTC);

        let jar = set_session_cookie(test_jar(), &session_id, expiry);

        assert_eq!(get_session_id(&jar), Ok(session_id));
        let cookie = jar.get(COOKIE_SESSION_ID).unwrap();
        assert_eq!(cookie.expires_datetime(), Some(expiry));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn missing_cookie_is_an_error() {
        assert_eq!(get_session_id(&test_jar()), Err(Error::CookieMissing));
    }

    #[test]
    fn invalid_session_id_is_an_error() {
        let jar = test_jar().add(Cookie::new(COOKIE_SESSION_ID, "deleted"));

        assert_eq!(get_session_id(&jar), Err(Error::CookieMissing));
    }
}
