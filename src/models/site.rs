use serde::Serialize;

/// Landing page summary.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub game_started: bool,
    pub submissions_locked: bool,
    pub props: u64,
    pub entries: u64,
}
