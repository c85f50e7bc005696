//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use rand::rngs::StdRng;
use sha2::{Digest, Sha512};

use crate::{Error, session::SessionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    pub local_timezone: String,

    /// The transaction submitted in each session.
    pub sessions: SessionStore,

    /// The source of simulated balances, reference numbers and session IDs.
    pub rng: SharedRng,
}

impl AppState {
    /// Create a new [AppState] with an empty session store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Africa/Lagos".
    /// Pass a seeded `rng` to make simulated balances and reference numbers reproducible.
    pub fn new(cookie_secret: &str, local_timezone: &str, rng: StdRng) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            local_timezone: local_timezone.to_owned(),
            sessions: SessionStore::default(),
            rng: SharedRng::new(rng),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}

/// A random number generator shared between request handlers.
#[derive(Debug, Clone)]
pub struct SharedRng(Arc<Mutex<StdRng>>);

impl SharedRng {
    /// Share `rng` between handlers.
    pub fn new(rng: StdRng) -> Self {
        Self(Arc::new(Mutex::new(rng)))
    }

    /// Lock the generator for exclusive use.
    ///
    /// # Errors
    ///
    /// Returns [Error::RngLockError] if the lock is poisoned.
    pub fn lock(&self) -> Result<MutexGuard<'_, StdRng>, Error> {
        self.0
            .lock()
            .inspect_err(|error| {
                tracing::error!("could not acquire random number generator lock: {error}")
            })
            .map_err(|_| Error::RngLockError)
    }
}
