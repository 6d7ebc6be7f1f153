//! Dashboard view model handed to the rendering layer.

use serde::Serialize;

use super::location::Location;
use super::stats::StatsSummary;

/// Composed dashboard data.
///
/// `items` is always present (possibly empty); `stats` is `null` when the
/// statistics could not be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub items: Vec<Location>,
    pub stats: Option<StatsSummary>,
}

/// Temporary redirect to the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub location: String,
}

impl LoginRedirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Result of loading the dashboard: either a page or a redirect.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutcome {
    Page(ViewModel),
    Redirect(LoginRedirect),
}

impl DashboardOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_stats_serialize_as_null() {
        let view = ViewModel {
            items: Vec::new(),
            stats: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, json!({ "items": [], "stats": null }));
    }

    #[test]
    fn redirect_detection() {
        assert!(DashboardOutcome::Redirect(LoginRedirect::to("/login")).is_redirect());
        let page = DashboardOutcome::Page(ViewModel {
            items: Vec::new(),
            stats: None,
        });
        assert!(!page.is_redirect());
    }
}
