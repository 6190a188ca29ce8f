//! `SeaORM` Entity for the meal_plan_users join table.

use crate::progress::Progress;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::meal_plan_users::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "meal_plan_users")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    pub user_id: Id,
    #[schema(value_type = Uuid)]
    pub meal_plan_id: Id,
    #[serde(skip_deserializing)]
    #[sea_orm(column_type = "JsonBinary")]
    #[schema(value_type = Vec<i32>)]
    pub progress: Progress,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub joined_at: DateTimeWithTimeZone,
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
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::meal_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlans.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
