use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contest-wide settings. Exactly one row exists (id = 1), created at startup
/// or lazily on first access.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// When true, picks and standings are publicly visible.
    #[sea_orm(default_value = false)]
    pub game_started: bool,

    /// When true, no new entries may be submitted.
    #[sea_orm(default_value = false)]
    pub submissions_locked: bool,
}

impl ActiveModelBehavior for ActiveModel {}
