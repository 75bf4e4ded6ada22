use axum::{Json, extract::State};
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{entry, prop, settings};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminSession;
use crate::extractors::json::AppJson;
use crate::models::admin::{
    DashboardResponse, SettingsAction, SettingsActionRequest, SettingsResponse,
};
use crate::state::AppState;
use crate::utils::settings::get_settings;

#[utoipa::path(
    get,
    path = "/admin",
    tag = "Admin",
    operation_id = "adminDashboard",
    summary = "Admin dashboard counts",
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session))]
pub async fn dashboard(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let settings = get_settings(&state.db).await?;
    let props = prop::Entity::find().count(&state.db).await?;
    let entries = entry::Entity::find().count(&state.db).await?;
    let resolved = prop::Entity::find()
        .filter(prop::Column::Resolved.eq(true))
        .count(&state.db)
        .await?;

    Ok(Json(DashboardResponse {
        props,
        entries,
        resolved,
        settings: settings.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/settings",
    tag = "Admin",
    operation_id = "updateSettings",
    summary = "Apply a settings action",
    description = "Applies one of the four flag transitions. `start_game` also locks submissions; `stop_game` leaves them locked. Any sequence of actions is legal.",
    request_body = SettingsActionRequest,
    responses(
        (status = 200, description = "Updated settings", body = SettingsResponse),
        (status = 400, description = "Unknown action (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session, payload))]
pub async fn update_settings(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(payload): AppJson<SettingsActionRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let current = get_settings(&state.db).await?;
    let mut active: settings::ActiveModel = current.into();

    match payload.action {
        SettingsAction::StartGame => {
            active.game_started = Set(true);
            active.submissions_locked = Set(true);
        }
        SettingsAction::StopGame => {
            active.game_started = Set(false);
        }
        SettingsAction::LockSubmissions => {
            active.submissions_locked = Set(true);
        }
        SettingsAction::UnlockSubmissions => {
            active.submissions_locked = Set(false);
        }
    }

    let updated = active.update(&state.db).await?;
    info!(action = ?payload.action, "Applied settings action");

    Ok(Json(updated.into()))
}
