use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::Func;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{answer, entry, pick, prop};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::sheet::{
    SheetAnswer, SheetProp, SheetResponse, SubmitSheetRequest, SubmitSheetResponse,
    validate_submit_sheet,
};
use crate::state::AppState;
use crate::utils::settings::get_settings;

#[utoipa::path(
    get,
    path = "/prop-sheet",
    tag = "Public",
    operation_id = "getPropSheet",
    summary = "Fetch the blank submission sheet",
    description = "All props in display order with their answers. Closed once submissions are locked.",
    responses(
        (status = 200, description = "The sheet", body = SheetResponse),
        (status = 409, description = "Submissions closed (SUBMISSIONS_CLOSED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_sheet(State(state): State<AppState>) -> Result<Json<SheetResponse>, AppError> {
    let settings = get_settings(&state.db).await?;
    if settings.submissions_locked {
        return Err(AppError::SubmissionsClosed);
    }

    let props = ordered_props(&state.db).await?;
    let mut answers_by_prop = answers_by_prop(&state.db).await?;

    let props = props
        .into_iter()
        .map(|p| {
            let answers = answers_by_prop.remove(&p.id).unwrap_or_default();
            SheetProp {
                id: p.id,
                question: p.question,
                note: p.note,
                answers: answers
                    .into_iter()
                    .map(|a| SheetAnswer {
                        id: a.id,
                        text: a.text,
                        points: a.points,
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(Json(SheetResponse { props }))
}

#[utoipa::path(
    post,
    path = "/prop-sheet",
    tag = "Public",
    operation_id = "submitPropSheet",
    summary = "Submit picks",
    description = "Creates an entry and its picks in one transaction. Names are unique case-insensitively. Partial sheets are accepted: props may be skipped, but at most one pick per prop. Every pick's answer must belong to its prop.",
    request_body = SubmitSheetRequest,
    responses(
        (status = 201, description = "Entry created", body = SubmitSheetResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Submissions closed or name taken (SUBMISSIONS_CLOSED, NAME_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn submit_sheet(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitSheetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let settings = get_settings(&state.db).await?;
    if settings.submissions_locked {
        return Err(AppError::SubmissionsClosed);
    }
    validate_submit_sheet(&payload)?;

    let name = payload.name.trim().to_string();

    let txn = state.db.begin().await?;

    let existing = entry::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(entry::Column::Name))).eq(name.to_lowercase()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::NameTaken(name));
    }

    // Validate picks against the current props and answers.
    let props: HashMap<i32, prop::Model> = prop::Entity::find()
        .all(&txn)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let answers: HashMap<i32, answer::Model> = answer::Entity::find()
        .all(&txn)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    for pick in &payload.picks {
        if !props.contains_key(&pick.prop_id) {
            return Err(AppError::Validation(format!(
                "Unknown prop {}",
                pick.prop_id
            )));
        }
        match answers.get(&pick.answer_id) {
            Some(a) if a.prop_id == pick.prop_id => {}
            _ => {
                return Err(AppError::Validation(format!(
                    "Answer {} does not belong to prop {}",
                    pick.answer_id, pick.prop_id
                )));
            }
        }
    }

    let new_entry = entry::ActiveModel {
        name: Set(name.clone()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let entry = match new_entry.insert(&txn).await {
        Ok(model) => model,
        // Exact-name race slipped past the case-insensitive check.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(AppError::NameTaken(name));
        }
        Err(e) => return Err(e.into()),
    };

    let picks_saved = payload.picks.len();
    for pick in payload.picks {
        let new_pick = pick::ActiveModel {
            entry_id: Set(entry.id),
            prop_id: Set(pick.prop_id),
            answer_id: Set(pick.answer_id),
            ..Default::default()
        };
        new_pick.insert(&txn).await?;
    }

    txn.commit().await?;

    info!(entry_id = entry.id, picks_saved, "Stored submission");

    Ok((
        StatusCode::CREATED,
        Json(SubmitSheetResponse {
            id: entry.id,
            name: entry.name,
            picks_saved,
        }),
    ))
}

/// All props in display order.
pub async fn ordered_props<C: ConnectionTrait>(db: &C) -> Result<Vec<prop::Model>, AppError> {
    Ok(prop::Entity::find()
        .order_by_asc(prop::Column::Position)
        .order_by_asc(prop::Column::Id)
        .all(db)
        .await?)
}

/// All answers grouped by prop, each group in display order.
pub async fn answers_by_prop<C: ConnectionTrait>(
    db: &C,
) -> Result<HashMap<i32, Vec<answer::Model>>, AppError> {
    let mut grouped: HashMap<i32, Vec<answer::Model>> = HashMap::new();
    for a in answer::Entity::find()
        .order_by_asc(answer::Column::Position)
        .order_by_asc(answer::Column::Id)
        .all(db)
        .await?
    {
        grouped.entry(a.prop_id).or_default().push(a);
    }
    Ok(grouped)
}
