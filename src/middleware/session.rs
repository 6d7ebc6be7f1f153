//! Session resolution: `sessionid` cookie to authenticated user.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::errors::AppError;
use crate::models::user::CurrentUser;
use crate::services::backend::SESSION_COOKIE;
use crate::AppState;

/// Middleware: look up the user behind the session cookie.
///
/// On success the [`CurrentUser`] is stored in request extensions. Any
/// failure leaves the request anonymous; this layer never rejects.
pub async fn resolve_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    if let Some(session_id) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) {
        match state.backend.user_metadata(&session_id).await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "Session resolved");
                request.extensions_mut().insert(user);
            }
            Err(e) if e.upstream_status().is_some_and(|s| s.is_client_error()) => {
                tracing::debug!(error = %e, "Session rejected by backend");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
            }
        }
    }

    next.run(request).await
}

/// Identity and session cookie for one request, passed explicitly to services.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<CurrentUser>,
    pub session_id: Option<String>,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(RequestContext {
            user: parts.extensions.get::<CurrentUser>().cloned(),
            session_id: jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()),
        })
    }
}

/// Extractor for handlers that require a resolved user.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
