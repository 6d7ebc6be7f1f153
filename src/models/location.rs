//! Location records as returned by the backend listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A location record, passed through to the rendering layer unmodified.
///
/// The backend owns the schema and no shape is enforced here; `id` and
/// `created_at` are only read for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(Value);

impl Location {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Creation time, when present and RFC 3339 formatted.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.0
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }
}

impl From<Value> for Location {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
