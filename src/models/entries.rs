use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::PickStatus;

/// An entry with its current score, for list views.
#[derive(Serialize, utoipa::ToSchema)]
pub struct EntrySummary {
    pub id: i32,
    pub name: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// The chosen answer for one prop on an entry's sheet.
#[derive(Serialize, utoipa::ToSchema)]
pub struct EntryPick {
    pub answer_id: i32,
    pub answer_text: String,
    pub points: i32,
    pub status: PickStatus,
}

/// One row of an entry's sheet: the prop plus the pick, if any was made.
#[derive(Serialize, utoipa::ToSchema)]
pub struct EntryPickRow {
    pub prop_id: i32,
    pub question: String,
    pub pick: Option<EntryPick>,
}

/// Full detail view of a single entry.
#[derive(Serialize, utoipa::ToSchema)]
pub struct EntryDetailResponse {
    pub id: i32,
    pub name: String,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    /// All props in display order, with this entry's picks filled in.
    pub picks: Vec<EntryPickRow>,
}
