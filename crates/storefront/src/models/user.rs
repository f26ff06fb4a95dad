//! User domain types.
//!
//! These types represent validated domain objects for the mock identity
//! flow. There is no real backend: the directory lives in the local
//! key-value store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clementine_core::{Email, UserId};

/// A locally registered account record.
///
/// The password is stored in clear text. That is a deliberately preserved
/// demo defect, not a pattern: the field is named `password` rather than
/// `password_hash` so nothing downstream mistakes it for a digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Unique user ID, generated at registration.
    pub id: UserId,
    /// Email address, unique across the directory (case-sensitive).
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Clear-text password (demo only).
    pub password: String,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

/// The currently authenticated identity.
///
/// A directory user's fields with the credential stripped; this is the only
/// user shape the view layer ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User's directory ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
}

impl From<&DirectoryUser> for SessionUser {
    fn from(user: &DirectoryUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
