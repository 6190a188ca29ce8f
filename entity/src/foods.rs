//! `SeaORM` Entity for the foods table. Macros are grams per 100 g.

use crate::food_type::FoodType;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::foods::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "foods")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub carbs: Option<f64>,
    pub protein: f64,
    pub fat: f64,
    #[serde(default)]
    pub food_type: FoodType,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Calories per 100 g, using 4 kcal/g for carbs and protein and 9 kcal/g for fat.
    pub fn calories(&self) -> f64 {
        self.carbs.unwrap_or_default() * 4.0 + self.protein * 4.0 + self.fat * 9.0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_foods::Entity")]
    MealFoods,
}

impl Related<super::meal_foods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealFoods.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn food(carbs: Option<f64>, protein: f64, fat: f64) -> Model {
        Model {
            id: Id::new_v4(),
            name: "Oats".to_string(),
            description: None,
            image_url: None,
            carbs,
            protein,
            fat,
            food_type: FoodType::Grain,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn calories_weights_fat_higher_than_carbs_and_protein() {
        assert_eq!(food(Some(10.0), 5.0, 2.0).calories(), 78.0);
    }

    #[test]
    fn calories_treats_missing_carbs_as_zero() {
        assert_eq!(food(None, 20.0, 1.0).calories(), 89.0);
    }
}
