use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of a food.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "food_type")]
pub enum FoodType {
    #[serde(rename = "other")]
    #[sea_orm(string_value = "other")]
    #[default]
    Other,
    #[serde(rename = "fruit")]
    #[sea_orm(string_value = "fruit")]
    Fruit,
    #[serde(rename = "vegetable")]
    #[sea_orm(string_value = "vegetable")]
    Vegetable,
    #[serde(rename = "grain")]
    #[sea_orm(string_value = "grain")]
    Grain,
    #[serde(rename = "protein")]
    #[sea_orm(string_value = "protein")]
    Protein,
    #[serde(rename = "dairy")]
    #[sea_orm(string_value = "dairy")]
    Dairy,
    #[serde(rename = "fat")]
    #[sea_orm(string_value = "fat")]
    Fat,
    #[serde(rename = "snack")]
    #[sea_orm(string_value = "snack")]
    Snack,
    #[serde(rename = "beverage")]
    #[sea_orm(string_value = "beverage")]
    Beverage,
}

impl FoodType {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            FoodType::Other => "Other",
            FoodType::Fruit => "Fruit",
            FoodType::Vegetable => "Vegetable",
            FoodType::Grain => "Grain / Cereal",
            FoodType::Protein => "Protein (Meat, Fish, Eggs)",
            FoodType::Dairy => "Dairy",
            FoodType::Fat => "Fats & Oils",
            FoodType::Snack => "Snacks",
            FoodType::Beverage => "Beverages",
        }
    }
}

impl std::fmt::Display for FoodType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodType::Other => write!(fmt, "other"),
            FoodType::Fruit => write!(fmt, "fruit"),
            FoodType::Vegetable => write!(fmt, "vegetable"),
            FoodType::Grain => write!(fmt, "grain"),
            FoodType::Protein => write!(fmt, "protein"),
            FoodType::Dairy => write!(fmt, "dairy"),
            FoodType::Fat => write!(fmt, "fat"),
            FoodType::Snack => write!(fmt, "snack"),
            FoodType::Beverage => write!(fmt, "beverage"),
        }
    }
}
