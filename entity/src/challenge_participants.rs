//! `SeaORM` Entity for the challenge_participants table.
//! A user joins at most one challenge at a time and ticks days off as they go.

use crate::progress::Progress;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::challenge_participants::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "challenge_participants")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    pub user_id: Id,
    #[schema(value_type = Uuid)]
    pub challenge_id: Id,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = Date)]
    pub date_joined: Date,
    #[serde(skip_deserializing)]
    #[sea_orm(column_type = "JsonBinary")]
    #[schema(value_type = Vec<i32>)]
    pub progress: Progress,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::challenges::Entity",
        from = "Column::ChallengeId",
        to = "super::challenges::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Challenges,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenges.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
