use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::SESSION_COOKIE;
use crate::extractors::json::AppJson;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::jwt;

#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "Admin Session",
    operation_id = "adminLogin",
    summary = "Log in as admin",
    description = "Compares the presented password against the configured shared secret and sets the signed session cookie on success.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = LoginResponse),
        (status = 401, description = "Wrong password (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.password != state.config.auth.admin_password {
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt::sign(&state.config.auth.session_secret)
        .map_err(|e| AppError::Internal(format!("Session sign error: {e}")))?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(LoginResponse { admin: true })))
}

#[utoipa::path(
    get,
    path = "/admin/logout",
    tag = "Admin Session",
    operation_id = "adminLogout",
    summary = "Log out",
    description = "Clears the admin session cookie. Always succeeds, session or not.",
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build(SESSION_COOKIE).path("/").build();
    (jar.remove(cookie), StatusCode::NO_CONTENT)
}
