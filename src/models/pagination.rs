//! Paginated list envelope used by the backend listing endpoints.

use serde::Deserialize;

/// `{ count, next, previous, results }` as produced by the backend.
///
/// Only `results` is required. `count` is the backend's total and is
/// logged; the cursor fields are ignored since the dashboard never pages.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: Option<i64>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
