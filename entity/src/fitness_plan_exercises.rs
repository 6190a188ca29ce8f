//! `SeaORM` Entity for the fitness_plan_exercises table.
//! Schedules an exercise on a day of the week within a fitness plan.

use crate::week_day::WeekDay;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_sets() -> i32 {
    3
}

fn default_reps() -> i32 {
    10
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::fitness_plan_exercises::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "fitness_plan_exercises")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[schema(value_type = Uuid)]
    pub fitness_plan_id: Id,
    #[schema(value_type = Uuid)]
    pub exercise_id: Id,
    pub day: WeekDay,
    #[serde(default = "default_sets")]
    pub sets: i32,
    #[serde(default = "default_reps")]
    pub reps: i32,
    /// Duration in minutes, for cardio exercises
    pub duration_minutes: Option<i32>,
    /// Position of the exercise within the day's workout
    #[serde(default)]
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fitness_plans::Entity",
        from = "Column::FitnessPlanId",
        to = "super::fitness_plans::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FitnessPlans,
    #[sea_orm(
        belongs_to = "super::exercises::Entity",
        from = "Column::ExerciseId",
        to = "super::exercises::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Exercises,
}

impl Related<super::fitness_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessPlans.def()
    }
}

impl Related<super::exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
