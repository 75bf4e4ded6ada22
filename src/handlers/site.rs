use axum::{Json, extract::State};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{entry, prop};
use crate::error::AppError;
use crate::models::site::HomeResponse;
use crate::state::AppState;
use crate::utils::settings::get_settings;

#[utoipa::path(
    get,
    path = "/",
    tag = "Public",
    operation_id = "home",
    summary = "Landing page summary",
    description = "Returns the contest state flags and aggregate prop/entry counts.",
    responses(
        (status = 200, description = "Contest summary", body = HomeResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomeResponse>, AppError> {
    let settings = get_settings(&state.db).await?;
    let props = prop::Entity::find().count(&state.db).await?;
    let entries = entry::Entity::find().count(&state.db).await?;

    Ok(Json(HomeResponse {
        game_started: settings.game_started,
        submissions_locked: settings.submissions_locked,
        props,
        entries,
    }))
}
