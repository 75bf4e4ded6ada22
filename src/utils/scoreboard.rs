//! Shared loading helpers that bridge the store and the pure scoring engine.

use std::collections::HashMap;

use sea_orm::*;

use crate::entity::{answer, entry, pick, prop};
use crate::error::AppError;
use crate::scoring::{self, Standing};

/// All props and answers, keyed by id, for score computation.
pub async fn load_scoring_maps<C: ConnectionTrait>(
    db: &C,
) -> Result<(HashMap<i32, prop::Model>, HashMap<i32, answer::Model>), AppError> {
    let props = prop::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let answers = answer::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();
    Ok((props, answers))
}

/// Compute an unranked scoreboard row for every entry.
pub async fn entry_scores<C: ConnectionTrait>(db: &C) -> Result<Vec<Standing>, AppError> {
    let entries = entry::Entity::find().all(db).await?;
    let (props, answers) = load_scoring_maps(db).await?;

    let mut picks_by_entry: HashMap<i32, Vec<pick::Model>> = HashMap::new();
    for pick in pick::Entity::find().all(db).await? {
        picks_by_entry.entry(pick.entry_id).or_default().push(pick);
    }

    let rows = entries
        .into_iter()
        .map(|entry| {
            let picks = picks_by_entry.remove(&entry.id).unwrap_or_default();
            Standing {
                rank: 0,
                id: entry.id,
                name: entry.name,
                score: scoring::total_score(&picks, &props, &answers),
                correct: scoring::correct_count(&picks, &props),
            }
        })
        .collect();

    Ok(rows)
}

/// Resolved and total prop counts shown next to the standings.
pub async fn prop_progress<C: ConnectionTrait>(db: &C) -> Result<(u64, u64), AppError> {
    let resolved = prop::Entity::find()
        .filter(prop::Column::Resolved.eq(true))
        .count(db)
        .await?;
    let total = prop::Entity::find().count(db).await?;
    Ok((resolved, total))
}
