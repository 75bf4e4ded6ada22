use sea_orm::*;

use crate::entity::settings;
use crate::error::AppError;

/// Load the settings singleton, creating it lazily if absent.
pub async fn get_settings<C: ConnectionTrait>(db: &C) -> Result<settings::Model, AppError> {
    if let Some(model) = settings::Entity::find().one(db).await? {
        return Ok(model);
    }

    let model = settings::ActiveModel {
        id: Set(1),
        game_started: Set(false),
        submissions_locked: Set(false),
    };
    match model.insert(db).await {
        Ok(model) => Ok(model),
        // Lost a creation race: another request inserted the row first.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            settings::Entity::find()
                .one(db)
                .await?
                .ok_or_else(|| AppError::Internal("Settings row missing after insert race".into()))
        }
        Err(e) => Err(e.into()),
    }
}
