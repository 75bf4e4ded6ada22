use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{answer, pick, prop};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminSession;
use crate::extractors::json::AppJson;
use crate::handlers::sheet::{answers_by_prop, ordered_props};
use crate::models::props::{
    PropRequest, PropResponse, ResolvePropRequest, prop_response, validate_prop_request,
};
use crate::ordering::{self, MoveDirection};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/admin/props",
    tag = "Props",
    operation_id = "listProps",
    summary = "List props in display order",
    responses(
        (status = 200, description = "Props with answers", body = Vec<PropResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session))]
pub async fn list_props(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<PropResponse>>, AppError> {
    let props = ordered_props(&state.db).await?;
    let mut answers = answers_by_prop(&state.db).await?;

    let items = props
        .into_iter()
        .map(|p| {
            let prop_answers = answers.remove(&p.id).unwrap_or_default();
            prop_response(p, prop_answers)
        })
        .collect();

    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/admin/props",
    tag = "Props",
    operation_id = "createProp",
    summary = "Create a prop",
    description = "Appends the prop to the end of the display order. Answers are created in payload order; blank answer texts are skipped.",
    request_body = PropRequest,
    responses(
        (status = 201, description = "Prop created", body = PropResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session, payload), fields(question = %payload.question))]
pub async fn create_prop(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(payload): AppJson<PropRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_prop_request(&payload)?;

    let txn = state.db.begin().await?;

    let max_position: Option<i32> = prop::Entity::find()
        .select_only()
        .column_as(prop::Column::Position.max(), "max_position")
        .into_tuple::<Option<i32>>()
        .one(&txn)
        .await?
        .flatten();

    let new_prop = prop::ActiveModel {
        question: Set(payload.question.trim().to_string()),
        note: Set(normalized_note(payload.note)),
        position: Set(ordering::next_position(max_position)),
        resolved: Set(false),
        correct_answer_id: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let model = new_prop.insert(&txn).await?;

    let answers = insert_answers(&txn, model.id, payload.answers).await?;

    txn.commit().await?;

    info!(prop_id = model.id, "Created prop");
    Ok((StatusCode::CREATED, Json(prop_response(model, answers))))
}

#[utoipa::path(
    get,
    path = "/admin/props/{id}",
    tag = "Props",
    operation_id = "getProp",
    summary = "Get a prop by ID",
    params(("id" = i32, Path, description = "Prop ID")),
    responses(
        (status = 200, description = "Prop with answers", body = PropResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Prop not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session), fields(id))]
pub async fn get_prop(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PropResponse>, AppError> {
    let model = find_prop(&state.db, id).await?;
    let answers = prop_answers(&state.db, id).await?;
    Ok(Json(prop_response(model, answers)))
}

#[utoipa::path(
    put,
    path = "/admin/props/{id}",
    tag = "Props",
    operation_id = "updateProp",
    summary = "Replace a prop",
    description = "Replaces the question, note, and the full answer set. Replacing the answers discards their old IDs, so a resolved prop is unresolved by this operation; resolve it again afterwards.",
    params(("id" = i32, Path, description = "Prop ID")),
    request_body = PropRequest,
    responses(
        (status = 200, description = "Prop updated", body = PropResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Prop not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session, payload), fields(id))]
pub async fn update_prop(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PropRequest>,
) -> Result<Json<PropResponse>, AppError> {
    validate_prop_request(&payload)?;

    let txn = state.db.begin().await?;
    let existing = find_prop(&txn, id).await?;

    answer::Entity::delete_many()
        .filter(answer::Column::PropId.eq(id))
        .exec(&txn)
        .await?;
    let answers = insert_answers(&txn, id, payload.answers).await?;

    let mut active: prop::ActiveModel = existing.into();
    active.question = Set(payload.question.trim().to_string());
    active.note = Set(normalized_note(payload.note));
    // The old answer rows are gone, so any prior resolution now dangles.
    active.resolved = Set(false);
    active.correct_answer_id = Set(None);

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(prop_response(model, answers)))
}

#[utoipa::path(
    delete,
    path = "/admin/props/{id}",
    tag = "Props",
    operation_id = "deleteProp",
    summary = "Delete a prop",
    description = "Deletes the prop, its answers, and every pick referencing it. Affected entries' scores recompute on the next read.",
    params(("id" = i32, Path, description = "Prop ID")),
    responses(
        (status = 204, description = "Prop deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Prop not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session), fields(id))]
pub async fn delete_prop(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;
    find_prop(&txn, id).await?;

    pick::Entity::delete_many()
        .filter(pick::Column::PropId.eq(id))
        .exec(&txn)
        .await?;
    answer::Entity::delete_many()
        .filter(answer::Column::PropId.eq(id))
        .exec(&txn)
        .await?;
    prop::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;

    info!(prop_id = id, "Deleted prop");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/props/{id}/move/{direction}",
    tag = "Props",
    operation_id = "moveProp",
    summary = "Move a prop up or down",
    description = "Swaps display positions with the adjacent prop. Moving the first prop up or the last prop down is a successful no-op.",
    params(
        ("id" = i32, Path, description = "Prop ID"),
        ("direction" = String, Path, description = "`up` or `down`"),
    ),
    responses(
        (status = 204, description = "Move applied (or no-op at a boundary)"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Prop not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session), fields(id, direction = ?direction))]
pub async fn move_prop(
    _session: AdminSession,
    State(state): State<AppState>,
    Path((id, direction)): Path<(i32, MoveDirection)>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let props = ordered_props(&txn).await?;
    let index = props
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound("Prop not found".into()))?;

    if let Some(updates) = ordering::plan_move(&props, index, direction) {
        for (prop_id, position) in updates {
            prop::Entity::update_many()
                .filter(prop::Column::Id.eq(prop_id))
                .col_expr(prop::Column::Position, Expr::value(position))
                .exec(&txn)
                .await?;
        }
    }

    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/props/{id}/resolve",
    tag = "Props",
    operation_id = "resolveProp",
    summary = "Resolve or unresolve a prop",
    description = "With an `answer_id`, marks that answer correct; the answer must belong to the prop. With `answer_id: null`, clears the resolution.",
    params(("id" = i32, Path, description = "Prop ID")),
    request_body = ResolvePropRequest,
    responses(
        (status = 200, description = "Prop updated", body = PropResponse),
        (status = 400, description = "Answer does not belong to the prop (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Prop not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_session" = [])),
)]
#[instrument(skip(state, _session, payload), fields(id))]
pub async fn resolve_prop(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ResolvePropRequest>,
) -> Result<Json<PropResponse>, AppError> {
    let txn = state.db.begin().await?;
    let existing = find_prop(&txn, id).await?;
    let answers = prop_answers(&txn, id).await?;

    let mut active: prop::ActiveModel = existing.into();
    match payload.answer_id {
        Some(answer_id) => {
            if !answers.iter().any(|a| a.id == answer_id) {
                return Err(AppError::Validation(format!(
                    "Answer {answer_id} does not belong to prop {id}"
                )));
            }
            active.resolved = Set(true);
            active.correct_answer_id = Set(Some(answer_id));
        }
        None => {
            active.resolved = Set(false);
            active.correct_answer_id = Set(None);
        }
    }

    let model = active.update(&txn).await?;
    txn.commit().await?;

    info!(prop_id = id, resolved = model.resolved, "Updated prop resolution");
    Ok(Json(prop_response(model, answers)))
}

async fn find_prop<C: ConnectionTrait>(db: &C, id: i32) -> Result<prop::Model, AppError> {
    prop::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Prop not found".into()))
}

async fn prop_answers<C: ConnectionTrait>(db: &C, prop_id: i32) -> Result<Vec<answer::Model>, AppError> {
    Ok(answer::Entity::find()
        .filter(answer::Column::PropId.eq(prop_id))
        .order_by_asc(answer::Column::Position)
        .order_by_asc(answer::Column::Id)
        .all(db)
        .await?)
}

fn normalized_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Insert the non-blank answers for a prop, positions assigned by payload
/// order.
async fn insert_answers(
    txn: &DatabaseTransaction,
    prop_id: i32,
    answers: Vec<crate::models::props::AnswerInput>,
) -> Result<Vec<answer::Model>, AppError> {
    let mut inserted = Vec::new();
    for (i, input) in answers
        .into_iter()
        .filter(|a| !a.text.trim().is_empty())
        .enumerate()
    {
        let model = answer::ActiveModel {
            prop_id: Set(prop_id),
            text: Set(input.text.trim().to_string()),
            points: Set(input.points),
            position: Set(i as i32),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        inserted.push(model);
    }
    Ok(inserted)
}
