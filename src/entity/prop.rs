use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A multiple-choice prediction question.
///
/// `position` is a soft sort key: values need not be unique or contiguous.
/// All listings order by `(position ASC, id ASC)`.
///
/// `correct_answer_id` is deliberately a plain nullable column rather than a
/// foreign key; the application guarantees that a resolved prop references
/// one of its own answers.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub question: String,
    /// Optional free-text hint shown under the question.
    pub note: Option<String>,

    #[sea_orm(default_value = 0)]
    pub position: i32,

    #[sea_orm(default_value = false)]
    pub resolved: bool,
    pub correct_answer_id: Option<i32>,

    #[sea_orm(has_many)]
    pub answers: HasMany<super::answer::Entity>,

    #[sea_orm(has_many)]
    pub picks: HasMany<super::pick::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
