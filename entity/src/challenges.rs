//! `SeaORM` Entity for the challenges table.

use crate::challenge_muscle_group::ChallengeMuscleGroup;
use crate::difficulty::Difficulty;
use crate::workout_type::WorkoutType;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::challenges::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "challenges")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Free text duration shown to users, e.g. "30 days"
    pub duration: String,
    #[schema(value_type = String, format = Date)]
    pub start_date: Date,
    #[schema(value_type = String, format = Date)]
    pub end_date: Date,
    pub difficulty: Difficulty,
    pub muscle_group: ChallengeMuscleGroup,
    pub workout_type: WorkoutType,
    pub image_url: Option<String>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::challenge_participants::Entity")]
    ChallengeParticipants,
}

impl Related<super::challenge_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
