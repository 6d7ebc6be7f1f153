//! Session introspection for the rendering layer.

use axum::Json;

use crate::errors::ApiResponse;
use crate::models::user::CurrentUser;

/// GET /api/me — user resolved from the session cookie, 401 when anonymous.
pub async fn me(current_user: CurrentUser) -> Json<ApiResponse<CurrentUser>> {
    ApiResponse::success(current_user)
}
