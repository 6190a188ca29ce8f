//! `SeaORM` Entity for the exercises table.

use crate::difficulty::Difficulty;
use crate::equipment::Equipment;
use crate::muscle_group::MuscleGroup;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::exercises::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "exercises")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Estimated calories burned per minute
    pub calories_burned: Option<f64>,
    #[serde(default)]
    pub muscle_group: MuscleGroup,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fitness_plan_exercises::Entity")]
    FitnessPlanExercises,
}

impl Related<super::fitness_plan_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessPlanExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
