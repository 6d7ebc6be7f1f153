//! Authenticated user identity resolved from the session cookie.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User metadata returned by the backend for a valid session.
///
/// Only `username` is required; the stats endpoint is keyed by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub public_profile: bool,
}

impl CurrentUser {
    /// Identity with only a username, as used by tests and fixtures.
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            uuid: None,
            first_name: None,
            last_name: None,
            profile_pic: None,
            public_profile: false,
        }
    }
}
