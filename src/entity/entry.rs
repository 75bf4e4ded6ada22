use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A participant's named submission. Names are unique case-insensitively;
/// the store enforces exact uniqueness and the application layer rejects
/// case-variant duplicates before insert.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    #[sea_orm(has_many)]
    pub picks: HasMany<super::pick::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
