//! `SeaORM` Entity for the meal_foods table.
//! One portion of a food served at a meal time on a given plan day.

use crate::meal_time::MealTime;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_day() -> i32 {
    1
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::meal_foods::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "meal_foods")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[schema(value_type = Uuid)]
    pub meal_plan_id: Id,
    #[schema(value_type = Uuid)]
    pub food_id: Id,
    pub meal_time: MealTime,
    pub quantity_grams: f64,
    #[serde(default = "default_day")]
    pub day: i32,
    #[serde(default)]
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal_plans::Entity",
        from = "Column::MealPlanId",
        to = "super::meal_plans::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MealPlans,
    #[sea_orm(
        belongs_to = "super::foods::Entity",
        from = "Column::FoodId",
        to = "super::foods::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Foods,
}

impl Related<super::meal_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlans.def()
    }
}

impl Related<super::foods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
