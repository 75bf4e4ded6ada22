use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry's chosen answer for a specific prop. Created together with the
/// entry, never updated; deleted only when the owning entry or the referenced
/// prop is deleted.
///
/// `answer_id` carries no foreign key: the submission handler guarantees the
/// answer belongs to the referenced prop.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pick")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub entry_id: i32,
    #[sea_orm(belongs_to, from = "entry_id", to = "id")]
    pub entry: HasOne<super::entry::Entity>,

    pub prop_id: i32,
    #[sea_orm(belongs_to, from = "prop_id", to = "id")]
    pub prop: HasOne<super::prop::Entity>,

    pub answer_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
