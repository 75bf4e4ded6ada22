use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{entry, pick};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminSession;
use crate::handlers::sheet::ordered_props;
use crate::models::entries::{EntryDetailResponse, EntryPick, EntryPickRow, EntrySummary};
use crate::scoring;
use crate::state::AppState;
use crate::utils::scoreboard::load_scoring_maps;

#[utoipa::path(
    get,
    path = "/entries",
    tag = "Public",
    operation_id = "listEntries",
    summary = "List entries with scores",
    description = "All entries ordered by name, each with its current score.",
    responses(
        (status = 200, description = "Entries", body = Vec<EntrySummary>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntrySummary>>, AppError> {
    let entries = entry::Entity::find()
        .order_by_asc(entry::Column::Name)
        .all(&state.db)
        .await?;
    let (props, answers) = load_scoring_maps(&state.db).await?;

    let mut picks_by_entry: HashMap<i32, Vec<pick::Model>> = HashMap::new();
    for p in pick::Entity::find().all(&state.db).await? {
        picks_by_entry.entry(p.entry_id).or_default().push(p);
    }

    let items = entries
        .into_iter()
        .map(|e| {
            let picks = picks_by_entry.remove(&e.id).unwrap_or_default();
            EntrySummary {
                id: e.id,
                name: e.name,
                score: scoring::total_score(&picks, &props, &answers),
                created_at: e.created_at,
            }
        })
        .collect();

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/entry/{id}",
    tag = "Public",
    operation_id = "getEntry",
    summary = "Get one entry's sheet",
    description = "The entry's picks against every prop in display order, with per-pick status and the total score.",
    params(("id" = i32, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Entry detail", body = EntryDetailResponse),
        (status = 404, description = "Entry not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn entry_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EntryDetailResponse>, AppError> {
    let entry = find_entry(&state.db, id).await?;

    let props = ordered_props(&state.db).await?;
    let (props_map, answers) = load_scoring_maps(&state.db).await?;

    let picks: Vec<pick::Model> = pick::Entity::find()
        .filter(pick::Column::EntryId.eq(entry.id))
        .all(&state.db)
        .await?;
    let picks_by_prop: HashMap<i32, &pick::Model> =
        picks.iter().map(|p| (p.prop_id, p)).collect();

    let rows = props
        .into_iter()
        .map(|prop| {
            let pick = picks_by_prop.get(&prop.id).map(|p| {
                let status = scoring::pick_status(p, props_map.get(&p.prop_id));
                let (answer_text, points) = answers
                    .get(&p.answer_id)
                    .map(|a| (a.text.clone(), a.points))
                    .unwrap_or_default();
                EntryPick {
                    answer_id: p.answer_id,
                    answer_text,
                    points,
                    status,
                }
            });
            EntryPickRow {
                prop_id: prop.id,
                question: prop.question,
                pick,
            }
        })
        .collect();

    let score = scoring::total_score(&picks, &props_map, &answers);

    Ok(Json(EntryDetailResponse {
        id: entry.id,
        name: entry.name,
        score,
        created_at: entry.created_at,
        picks: rows,
    }))
}

#[utoipa::path(
    get,
    path = "/admin/entries",
    tag = "Admin",
    operation_id = "adminListEntries",
    summary = "List entries for management",
    responses(
        (status = 200, description = "Entries", body = Vec<EntrySummary>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session))]
pub async fn admin_list_entries(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<EntrySummary>>, AppError> {
    list_entries(State(state)).await
}

#[utoipa::path(
    delete,
    path = "/admin/entries/{id}",
    tag = "Admin",
    operation_id = "deleteEntry",
    summary = "Delete an entry",
    description = "Deletes the entry and all of its picks.",
    params(("id" = i32, Path, description = "Entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Entry not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session), fields(id))]
pub async fn delete_entry(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;
    let entry = find_entry(&txn, id).await?;

    pick::Entity::delete_many()
        .filter(pick::Column::EntryId.eq(entry.id))
        .exec(&txn)
        .await?;
    entry::Entity::delete_by_id(entry.id).exec(&txn).await?;

    txn.commit().await?;

    info!(entry_id = id, "Deleted entry");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_entry<C: ConnectionTrait>(db: &C, id: i32) -> Result<entry::Model, AppError> {
    entry::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".into()))
}
