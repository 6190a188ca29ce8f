//! `SeaORM` Entity for the meal_plans table.

use crate::meal_plan_type::MealPlanType;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::meal_plans::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "meal_plans")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub plan_type: MealPlanType,
    pub daily_calorie_target: Option<i32>,
    pub duration_weeks: i32,
    pub image_url: Option<String>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_foods::Entity")]
    MealFoods,
    #[sea_orm(has_many = "super::meal_plan_users::Entity")]
    MealPlanUsers,
}

impl Related<super::meal_foods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealFoods.def()
    }
}

impl Related<super::meal_plan_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlanUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
