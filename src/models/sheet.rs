use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One selectable answer on the submission sheet.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SheetAnswer {
    pub id: i32,
    pub text: String,
    pub points: i32,
}

/// One question on the submission sheet, answers in display order.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SheetProp {
    pub id: i32,
    pub question: String,
    pub note: Option<String>,
    pub answers: Vec<SheetAnswer>,
}

/// The blank submission sheet, props in display order.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SheetResponse {
    pub props: Vec<SheetProp>,
}

/// One chosen answer in a submission.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct PickInput {
    pub prop_id: i32,
    pub answer_id: i32,
}

/// Request body for submitting a prop sheet. Picks may cover any subset of
/// props (skipping questions is allowed), but at most one pick per prop.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitSheetRequest {
    /// Participant name, unique case-insensitively.
    #[schema(example = "alice")]
    pub name: String,
    #[serde(default)]
    pub picks: Vec<PickInput>,
}

/// Confirmation for a stored submission.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmitSheetResponse {
    pub id: i32,
    pub name: String,
    pub picks_saved: usize,
}

pub fn validate_submit_sheet(payload: &SubmitSheetRequest) -> Result<(), AppError> {
    let name = payload.name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(AppError::Validation("Name must be 1-100 characters".into()));
    }

    let mut seen = HashSet::new();
    for pick in &payload.picks {
        if !seen.insert(pick.prop_id) {
            return Err(AppError::Validation(format!(
                "Duplicate pick for prop {}",
                pick.prop_id
            )));
        }
    }

    Ok(())
}
