use serde::Serialize;

use crate::scoring::Standing;

/// The full standings view: ranked rows plus resolution progress.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
    /// Number of resolved props.
    pub resolved: u64,
    /// Total number of props.
    pub total: u64,
}

/// One row of the polling API payload. The shape is fixed for existing
/// clients: exactly `{name, score, id}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiStandingRow {
    pub name: String,
    pub score: i64,
    pub id: i32,
}

/// Payload of `GET /api/standings`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiStandingsResponse {
    pub standings: Vec<ApiStandingRow>,
    pub resolved: u64,
    pub total: u64,
}
