use sea_orm::*;
use tracing::info;

use crate::entity::settings;

/// Create the settings singleton (id = 1) if it does not exist yet.
///
/// Called once at startup; `crate::utils::settings::get_settings` also
/// creates it lazily, so concurrent first requests are safe either way.
pub async fn ensure_settings(db: &DatabaseConnection) -> Result<(), DbErr> {
    let model = settings::ActiveModel {
        id: Set(1),
        game_started: Set(false),
        submissions_locked: Set(false),
    };

    let result = settings::Entity::insert(model)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(settings::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await;

    match result {
        Ok(_) => {
            info!("Created settings row");
            Ok(())
        }
        Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e),
    }
}
