use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{answer, prop};
use crate::error::AppError;

/// One answer in a prop create/edit payload. Blank texts are skipped rather
/// than rejected, matching how a half-filled answer list is submitted.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct AnswerInput {
    pub text: String,
    /// Points awarded for this answer, must be >= 0.
    #[serde(default = "default_points")]
    pub points: i32,
}

fn default_points() -> i32 {
    1
}

/// Request body for creating a prop or replacing one wholesale (PUT).
#[derive(Deserialize, utoipa::ToSchema)]
pub struct PropRequest {
    #[schema(example = "Who wins the coin toss?")]
    pub question: String,
    /// Optional hint shown under the question; blank is treated as absent.
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

/// Request body for resolving a prop. `answer_id: null` unresolves it.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ResolvePropRequest {
    pub answer_id: Option<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AnswerResponse {
    pub id: i32,
    pub text: String,
    pub points: i32,
    pub position: i32,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PropResponse {
    pub id: i32,
    pub question: String,
    pub note: Option<String>,
    pub position: i32,
    pub resolved: bool,
    pub correct_answer_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// Answers in display order.
    pub answers: Vec<AnswerResponse>,
}

pub fn validate_prop_request(payload: &PropRequest) -> Result<(), AppError> {
    let question = payload.question.trim();
    if question.is_empty() || question.chars().count() > 500 {
        return Err(AppError::Validation(
            "Question must be 1-500 characters".into(),
        ));
    }
    if let Some(ref note) = payload.note
        && note.chars().count() > 300
    {
        return Err(AppError::Validation("Note must be at most 300 characters".into()));
    }
    for answer in &payload.answers {
        if answer.text.trim().chars().count() > 200 {
            return Err(AppError::Validation(
                "Answer text must be at most 200 characters".into(),
            ));
        }
        if answer.points < 0 {
            return Err(AppError::Validation("Points must be >= 0".into()));
        }
    }
    Ok(())
}

/// Build a response from a prop and its (already loaded) answers. Sorts the
/// answers into display order.
pub fn prop_response(prop: prop::Model, mut answers: Vec<answer::Model>) -> PropResponse {
    answers.sort_by_key(|a| (a.position, a.id));
    PropResponse {
        id: prop.id,
        question: prop.question,
        note: prop.note,
        position: prop.position,
        resolved: prop.resolved,
        correct_answer_id: prop.correct_answer_id,
        created_at: prop.created_at,
        answers: answers
            .into_iter()
            .map(|a| AnswerResponse {
                id: a.id,
                text: a.text,
                points: a.points,
                position: a.position,
            })
            .collect(),
    }
}
