use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Name of the cookie holding the signed admin session token.
pub const SESSION_COOKIE: &str = "propbowl_session";

/// Proof of an authenticated admin session, extracted from the session
/// cookie. Add this as a handler parameter to guard an admin-only route:
/// requests without a valid token are rejected with 401 before the handler
/// body runs.
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .ok_or(AppError::TokenMissing)?;

        let claims = jwt::verify(&token, &state.config.auth.session_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        if !claims.admin {
            return Err(AppError::TokenInvalid);
        }

        Ok(AdminSession)
    }
}
