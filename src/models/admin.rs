use serde::{Deserialize, Serialize};

/// The four admin transitions on the settings flags. Any sequence is legal;
/// no combination is rejected.
#[derive(Debug, Clone, Copy, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SettingsAction {
    /// Also locks submissions: entering "game started" closes the sheet.
    StartGame,
    /// Does not reopen submissions.
    StopGame,
    LockSubmissions,
    UnlockSubmissions,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SettingsActionRequest {
    pub action: SettingsAction,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SettingsResponse {
    pub game_started: bool,
    pub submissions_locked: bool,
}

/// Admin dashboard counts.
#[derive(Serialize, utoipa::ToSchema)]
pub struct DashboardResponse {
    pub props: u64,
    pub entries: u64,
    pub resolved: u64,
    pub settings: SettingsResponse,
}

impl From<crate::entity::settings::Model> for SettingsResponse {
    fn from(m: crate::entity::settings::Model) -> Self {
        Self {
            game_started: m.game_started,
            submissions_locked: m.submissions_locked,
        }
    }
}
