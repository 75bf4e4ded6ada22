//! Pure score and standings computation over already-loaded rows.
//!
//! Nothing here touches the store: handlers load picks, props, and answers
//! and pass them in. Malformed picks (dangling prop or answer references)
//! never fail — they simply count as pending and contribute zero points.

use std::collections::HashMap;

use serde::Serialize;

use crate::entity::{answer, pick, prop};

/// Outcome of a single pick against its prop's resolution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PickStatus {
    Pending,
    Correct,
    Incorrect,
}

/// Classify one pick. An absent prop is treated as unresolved.
pub fn pick_status(pick: &pick::Model, prop: Option<&prop::Model>) -> PickStatus {
    match prop {
        Some(prop) if prop.resolved => {
            if prop.correct_answer_id == Some(pick.answer_id) {
                PickStatus::Correct
            } else {
                PickStatus::Incorrect
            }
        }
        _ => PickStatus::Pending,
    }
}

/// Sum the points of every correct pick. Unresolved, incorrect, and dangling
/// picks contribute zero.
pub fn total_score(
    picks: &[pick::Model],
    props: &HashMap<i32, prop::Model>,
    answers: &HashMap<i32, answer::Model>,
) -> i64 {
    picks
        .iter()
        .filter(|p| pick_status(p, props.get(&p.prop_id)) == PickStatus::Correct)
        .filter_map(|p| answers.get(&p.answer_id))
        .map(|a| i64::from(a.points))
        .sum()
}

/// Number of correct picks, shown alongside the score in standings views.
pub fn correct_count(picks: &[pick::Model], props: &HashMap<i32, prop::Model>) -> u32 {
    picks
        .iter()
        .filter(|p| pick_status(p, props.get(&p.prop_id)) == PickStatus::Correct)
        .count() as u32
}

/// One row of the ranked leaderboard.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct Standing {
    /// 1-based position after sorting.
    pub rank: u32,
    pub id: i32,
    pub name: String,
    pub score: i64,
    /// Number of correct picks so far.
    pub correct: u32,
}

/// Sort standings by score descending and assign ranks.
///
/// Ties break by name ascending (case-insensitive), then id ascending, so the
/// leaderboard is deterministic across polls.
pub fn rank_entries(mut rows: Vec<Standing>) -> Vec<Standing> {
    rows.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = (i + 1) as u32;
    }
    rows
}
