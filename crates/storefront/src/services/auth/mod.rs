//! Mock authentication service.
//!
//! There is no backend and no security model: the user directory lives in
//! the local key-value store, passwords included, and every call sleeps a
//! configured artificial latency to mirror an asynchronous API. Only the
//! business-rule checks (duplicate email, credential mismatch) can fail;
//! the latency itself cannot.
//!
//! Email uniqueness is a case-sensitive exact match - `Email` validates
//! structure but normalizes nothing.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument};

use clementine_core::{Email, UserId};

use crate::models::{DirectoryUser, SessionUser};
use crate::storage::{KeyValueStore, KeyValueStoreExt, StorageError, keys};

/// Mock identity state: directory access plus the current session.
///
/// `loading` and `error` are mutable view-facing status: `loading` is true
/// strictly while a call is in flight, and `error` holds the display string
/// of the most recent failure until a caller clears it.
pub struct AuthService {
    storage: Arc<dyn KeyValueStore>,
    current_user: Option<SessionUser>,
    loading: bool,
    error: Option<String>,
    latency: Duration,
}

impl AuthService {
    /// Construct the service, hydrating the current session from storage.
    ///
    /// A missing or corrupted session record means unauthenticated.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn KeyValueStore>, latency: Duration) -> Self {
        let current_user = storage.read_json(keys::USER);
        Self {
            storage,
            current_user,
            loading: false,
            error: None,
            latency,
        }
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Register a new user and log them in.
    ///
    /// Appends a directory record with a fresh UUID, persists the directory,
    /// sets and persists the session (auto-login), and returns the created
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] if the email is malformed and
    /// [`AuthError::DuplicateEmail`] if it already exists in the directory
    /// (case-sensitive exact match). Either failure also lands in
    /// [`error`](Self::error).
    #[instrument(skip(self, password))]
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<DirectoryUser, AuthError> {
        self.begin();
        let result = self.register_inner(email, password, name).await;
        self.finish(result.as_ref().err());
        result
    }

    async fn register_inner(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<DirectoryUser, AuthError> {
        self.simulate_latency().await;

        let email = Email::parse(email)?;

        let mut users = self.directory();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = DirectoryUser {
            id: UserId::generate(),
            email,
            name: name.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.storage.write_json(keys::USERS, &users)?;

        self.set_session(Some(SessionUser::from(&user)))?;
        info!(id = %user.id, "registered new user");

        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// On success the session holds the matched user with the password
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no directory user
    /// matches both fields exactly; the current user stays unset. The
    /// failure also lands in [`error`](Self::error).
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        self.begin();
        let result = self.login_inner(email, password).await;
        self.finish(result.as_ref().err());
        result
    }

    async fn login_inner(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError> {
        self.simulate_latency().await;

        let users = self.directory();
        let user = users
            .iter()
            .find(|u| u.email.as_str() == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = SessionUser::from(user);
        self.set_session(Some(session.clone()))?;
        info!(id = %session.id, "user logged in");

        Ok(session)
    }

    /// Log out: clear the current session and its persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] only if removing the persisted record
    /// fails; there is no business-rule failure.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.set_session(None)?;
        Ok(())
    }

    // =========================================================================
    // View-Facing State
    // =========================================================================

    /// Whether a current session exists.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// The current session user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&SessionUser> {
        self.current_user.as_ref()
    }

    /// Whether a register/login call is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The display message of the most recent failure, until cleared.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the error message (e.g., on screen mount/unmount). Other state
    /// is untouched.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Read the user directory. Liberal read: absent or corrupted means
    /// empty.
    fn directory(&self) -> Vec<DirectoryUser> {
        self.storage.read_json(keys::USERS).unwrap_or_default()
    }

    /// Set or clear the current session, persisting the change first.
    fn set_session(&mut self, user: Option<SessionUser>) -> Result<(), StorageError> {
        match &user {
            Some(session) => self.storage.write_json(keys::USER, session)?,
            None => self.storage.remove(keys::USER)?,
        }
        self.current_user = user;
        Ok(())
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self, error: Option<&AuthError>) {
        if let Some(e) = error {
            self.error = Some(e.to_string());
        }
        self.loading = false;
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
