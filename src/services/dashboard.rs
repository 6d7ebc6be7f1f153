//! Dashboard aggregation: recent locations plus per-user statistics.

use crate::errors::{AppError, UpstreamBody};
use crate::middleware::session::RequestContext;
use crate::models::dashboard::{DashboardOutcome, LoginRedirect, ViewModel};
use crate::models::location::Location;
use crate::models::stats::StatsSummary;
use crate::services::backend::BackendClient;

/// Number of recent locations shown on the dashboard.
pub const RECENT_LOCATIONS_LIMIT: usize = 6;

/// Load the dashboard for one request.
///
/// Anonymous requests are redirected before any backend call. Otherwise the
/// locations and stats requests run concurrently and are joined; a stats
/// failure only drops `stats`, a locations failure redirects to login.
pub async fn load(
    backend: &BackendClient,
    ctx: &RequestContext,
    login_path: &str,
) -> DashboardOutcome {
    let Some(user) = ctx.user.as_ref() else {
        tracing::debug!("No authenticated user, redirecting to login");
        return DashboardOutcome::Redirect(LoginRedirect::to(login_path));
    };

    let session_id = ctx.session_id.as_deref();
    let (items, stats) = tokio::join!(
        backend.recent_locations(session_id, RECENT_LOCATIONS_LIMIT),
        backend.user_stats(session_id, &user.username),
    );

    compose(&user.username, items, stats, login_path)
}

/// Combine both fetch results. Precedence does not depend on which request
/// finished first: the stats outcome is settled, then a locations failure
/// overrides everything with a redirect.
pub fn compose(
    username: &str,
    items: Result<Vec<Location>, AppError>,
    stats: Result<StatsSummary, AppError>,
    login_path: &str,
) -> DashboardOutcome {
    let stats = match stats {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::warn!(username = %username, error = %e, "Failed to fetch user stats");
            None
        }
    };

    match items {
        Ok(items) => {
            let newest = items.iter().filter_map(Location::created_at).max();
            let ids: Vec<String> = items
                .iter()
                .filter_map(Location::id)
                .map(|id| id.to_string())
                .collect();
            tracing::debug!(
                username = %username,
                items = items.len(),
                newest = ?newest,
                ids = ?ids,
                has_stats = stats.is_some(),
                "Dashboard loaded"
            );
            DashboardOutcome::Page(ViewModel { items, stats })
        }
        Err(e) => {
            log_items_failure(username, &e);
            DashboardOutcome::Redirect(LoginRedirect::to(login_path))
        }
    }
}

fn log_items_failure(username: &str, err: &AppError) {
    match err {
        AppError::Upstream {
            status,
            body: UpstreamBody::Json(detail),
        } => {
            tracing::error!(username = %username, status = %status, detail = %detail, "Failed to fetch recent locations");
        }
        AppError::Upstream {
            status,
            body: UpstreamBody::Text(raw),
        } => {
            tracing::error!(
                username = %username,
                status = %status,
                raw_body = %raw,
                "Failed to fetch recent locations, error body was not JSON"
            );
        }
        other => {
            tracing::error!(username = %username, error = %other, "Failed to fetch recent locations");
        }
    }
}
