use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::AppError;
use crate::models::standings::{ApiStandingRow, ApiStandingsResponse, StandingsResponse};
use crate::scoring;
use crate::state::AppState;
use crate::utils::scoreboard::{entry_scores, prop_progress};
use crate::utils::settings::get_settings;

#[utoipa::path(
    get,
    path = "/standings",
    tag = "Public",
    operation_id = "standings",
    summary = "Full standings view",
    description = "Ranked entries with scores and correct-pick counts, plus resolution progress.",
    responses(
        (status = 200, description = "Standings", body = StandingsResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn standings(State(state): State<AppState>) -> Result<Json<StandingsResponse>, AppError> {
    let rows = entry_scores(&state.db).await?;
    let standings = scoring::rank_entries(rows);
    let (resolved, total) = prop_progress(&state.db).await?;

    Ok(Json(StandingsResponse {
        standings,
        resolved,
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/api/standings",
    tag = "Public",
    operation_id = "apiStandings",
    summary = "Polling standings feed",
    description = "Lightweight standings payload for the live-updating leaderboard, polled by clients on a timer. Returns 403 with `{\"error\": \"Game not started\"}` until the game starts.",
    responses(
        (status = 200, description = "Standings feed", body = ApiStandingsResponse),
        (status = 403, description = "Game not started"),
    ),
)]
#[instrument(skip(state))]
pub async fn api_standings(
    State(state): State<AppState>,
) -> Result<Json<ApiStandingsResponse>, AppError> {
    let settings = get_settings(&state.db).await?;
    if !settings.game_started {
        return Err(AppError::GameNotStarted);
    }

    let rows = entry_scores(&state.db).await?;
    let standings = scoring::rank_entries(rows)
        .into_iter()
        .map(|r| ApiStandingRow {
            name: r.name,
            score: r.score,
            id: r.id,
        })
        .collect();
    let (resolved, total) = prop_progress(&state.db).await?;

    Ok(Json(ApiStandingsResponse {
        standings,
        resolved,
        total,
    }))
}
