//! `SeaORM` Entity for the fitness_plans table.

use crate::activity_level::ActivityLevel;
use crate::fitness_plan_type::FitnessPlanType;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::fitness_plans::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "fitness_plans")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub plan_type: FitnessPlanType,
    /// Duration in weeks, at least one
    pub duration_weeks: i32,
    #[serde(default)]
    pub difficulty: ActivityLevel,
    pub picture_url: Option<String>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fitness_plan_exercises::Entity")]
    FitnessPlanExercises,
    #[sea_orm(has_many = "super::fitness_plan_users::Entity")]
    FitnessPlanUsers,
}

impl Related<super::fitness_plan_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessPlanExercises.def()
    }
}

impl Related<super::fitness_plan_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessPlanUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
