//! An in-memory store mapping session IDs to the session's transaction.

use std::{
    collections::HashMap,
    fmt::Write,
    sync::{Arc, Mutex, MutexGuard},
};

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::{Error, transfer::TransactionRecord};

/// How long a session lasts after its transaction was last written.
pub const SESSION_DURATION: Duration = Duration::hours(24);

/// The number of random bytes in a session ID.
const SESSION_ID_BYTES: usize = 16;

/// An opaque, randomly generated session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new session ID from 128 random bits, hex encoded.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; SESSION_ID_BYTES] = rng.r#gen();
        let mut id = String::with_capacity(SESSION_ID_BYTES * 2);

        for byte in bytes {
            // Writing to a String cannot fail.
            let _ = write!(id, "{byte:02x}");
        }

        Self(id)
    }

    /// Parse a session ID from a cookie value.
    ///
    /// Returns `None` unless `value` is 32 lowercase hex digits.
    pub fn parse(value: &str) -> Option<Self> {
        let is_valid = value.len() == SESSION_ID_BYTES * 2
            && value
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));

        is_valid.then(|| Self(value.to_owned()))
    }

    /// The hex encoded session ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
struct SessionEntry {
    record: TransactionRecord,
    expires_at: OffsetDateTime,
}

/// A thread safe, cloneable store of the transaction submitted in each session.
///
/// Each session holds at most one transaction. Writing a new transaction
/// replaces the old one.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, SessionEntry>>>,
    duration: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_DURATION)
    }
}

impl SessionStore {
    /// Create an empty store where sessions last for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            duration,
        }
    }

    /// Store `record` for `session_id`, replacing any previous transaction.
    ///
    /// Expired sessions are removed at the same time.
    ///
    /// Returns when the session expires.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the store lock is poisoned.
    pub fn insert(
        &self,
        session_id: SessionId,
        record: TransactionRecord,
        now: OffsetDateTime,
    ) -> Result<OffsetDateTime, Error> {
        let mut sessions = self.lock()?;
        sweep_expired(&mut sessions, now);

        let expires_at = now + self.duration;
        sessions.insert(session_id, SessionEntry { record, expires_at });

        Ok(expires_at)
    }

    /// Get the transaction for `session_id`.
    ///
    /// Returns `None` if the session does not exist or has expired.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the store lock is poisoned.
    pub fn get(
        &self,
        session_id: &SessionId,
        now: OffsetDateTime,
    ) -> Result<Option<TransactionRecord>, Error> {
        let mut sessions = self.lock()?;

        match sessions.get(session_id) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.record.clone())),
            Some(_) => {
                sessions.remove(session_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Remove every session that has expired by `now`.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the store lock is poisoned.
    pub fn remove_expired(&self, now: OffsetDateTime) -> Result<(), Error> {
        let mut sessions = self.lock()?;
        sweep_expired(&mut sessions, now);

        Ok(())
    }

    /// The number of sessions currently stored, including expired sessions
    /// that have not been removed yet.
    pub fn len(&self) -> Result<usize, Error> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionEntry>>, Error> {
        self.sessions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session store lock: {error}"))
            .map_err(|_| Error::SessionLockError)
    }
}

fn sweep_expired(sessions: &mut HashMap<SessionId, SessionEntry>, now: OffsetDateTime) {
    let count_before = sessions.len();
    sessions.retain(|_, entry| entry.expires_at > now);

    let removed = count_before - sessions.len();
    if removed > 0 {
        tracing::debug!("removed {removed} expired sessions");
    }
}
