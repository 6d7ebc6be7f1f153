//! HTTP client for the backend API, forwarding the caller's session cookie.

use std::time::Duration;

use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::{AppError, UpstreamBody};
use crate::models::location::Location;
use crate::models::pagination::Paginated;
use crate::models::stats::StatsSummary;
use crate::models::user::CurrentUser;

/// Name of the session cookie shared with the backend.
pub const SESSION_COOKIE: &str = "sessionid";

/// Thin wrapper over a pooled `reqwest::Client` bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config.server_endpoint.clone()))
    }

    pub fn with_client(http: Client, base: Url) -> Self {
        Self { http, base }
    }

    /// `GET /api/locations/?ordering=-created_at&limit={limit}`
    pub async fn recent_locations(
        &self,
        session_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Location>, AppError> {
        let url = self.recent_locations_url(limit)?;
        let page: Paginated<Location> = self.get_json(url, session_id).await?;
        tracing::debug!(
            total = ?page.count,
            returned = page.results.len(),
            "Fetched recent locations"
        );
        Ok(page.into_results())
    }

    /// `GET /api/stats/counts/{username}/`
    pub async fn user_stats(
        &self,
        session_id: Option<&str>,
        username: &str,
    ) -> Result<StatsSummary, AppError> {
        let url = self.user_stats_url(username)?;
        self.get_json(url, session_id).await
    }

    /// `GET /auth/user-metadata/`
    pub async fn user_metadata(&self, session_id: &str) -> Result<CurrentUser, AppError> {
        let url = self.endpoint(&["auth", "user-metadata", ""])?;
        self.get_json(url, Some(session_id)).await
    }

    /// Plain GET on the base URL; any HTTP answer counts as reachable.
    pub async fn probe(&self) -> Result<(), AppError> {
        self.http.get(self.base.clone()).send().await?;
        Ok(())
    }

    pub(crate) fn recent_locations_url(&self, limit: usize) -> Result<Url, AppError> {
        let mut url = self.endpoint(&["api", "locations", ""])?;
        url.query_pairs_mut()
            .append_pair("ordering", "-created_at")
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    pub(crate) fn user_stats_url(&self, username: &str) -> Result<Url, AppError> {
        self.endpoint(&["api", "stats", "counts", username, ""])
    }

    /// Append path segments to the base URL, percent-encoding each one.
    /// A trailing empty segment yields the trailing slash the backend expects.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| AppError::Internal(format!("Backend URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        session_id: Option<&str>,
    ) -> Result<T, AppError> {
        let mut request = self.http.get(url);
        if let Some(cookie) = session_cookie(session_id) {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request.send().await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// `sessionid=<value>` header value, or `None` when there is no session.
pub fn session_cookie(session_id: Option<&str>) -> Option<String> {
    session_id.map(|value| format!("{SESSION_COOKIE}={value}"))
}

async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(AppError::Upstream {
        status,
        body: UpstreamBody::from_text(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::with_client(Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn recent_locations_url_matches_backend_route() {
        let url = client("http://localhost:8000").recent_locations_url(6).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/locations/?ordering=-created_at&limit=6"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let url = client("https://example.test/backend/").recent_locations_url(6).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/backend/api/locations/?ordering=-created_at&limit=6"
        );
    }

    #[test]
    fn user_stats_url_has_trailing_slash() {
        let url = client("http://localhost:8000").user_stats_url("alice").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/stats/counts/alice/");
    }

    #[test]
    fn username_is_a_single_segment() {
        let url = client("http://localhost:8000").user_stats_url("a/b?c").unwrap();
        assert_eq!(url.path(), "/api/stats/counts/a%2Fb%3Fc/");
        assert!(url.query().is_none());
    }

    #[test]
    fn user_metadata_url() {
        let url = client("http://localhost:8000")
            .endpoint(&["auth", "user-metadata", ""])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/auth/user-metadata/");
    }

    #[test]
    fn session_cookie_header_value() {
        assert_eq!(session_cookie(Some("abc123")).as_deref(), Some("sessionid=abc123"));
        assert_eq!(session_cookie(None), None);
    }

    #[test]
    fn cannot_be_a_base_url_is_internal_error() {
        let err = client("mailto:ops@example.test").user_stats_url("alice").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
