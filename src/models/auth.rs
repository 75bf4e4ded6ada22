use serde::{Deserialize, Serialize};

/// Request body for admin login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// The shared admin password.
    pub password: String,
}

/// Successful login response. The session token travels in a cookie, not in
/// the body.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub admin: bool,
}
