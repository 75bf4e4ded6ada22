use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One selectable option for a prop. `prop_id` is immutable after creation;
/// editing a prop replaces its full answer set instead of mutating rows.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "answer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub prop_id: i32,
    #[sea_orm(belongs_to, from = "prop_id", to = "id")]
    pub prop: HasOne<super::prop::Entity>,

    pub text: String,

    /// Points awarded when this answer is the resolved correct one. Never
    /// negative.
    #[sea_orm(default_value = 1)]
    pub points: i32,

    /// Sort key within the prop.
    #[sea_orm(default_value = 0)]
    pub position: i32,
}

impl ActiveModelBehavior for ActiveModel {}
