use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Diet a meal plan follows.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "meal_plan_type")]
pub enum MealPlanType {
    #[serde(rename = "maintenance")]
    #[sea_orm(string_value = "maintenance")]
    #[default]
    Maintenance,
    #[serde(rename = "weight_loss")]
    #[sea_orm(string_value = "weight_loss")]
    WeightLoss,
    #[serde(rename = "muscle_gain")]
    #[sea_orm(string_value = "muscle_gain")]
    MuscleGain,
    #[serde(rename = "diabetic")]
    #[sea_orm(string_value = "diabetic")]
    Diabetic,
    #[serde(rename = "keto")]
    #[sea_orm(string_value = "keto")]
    Keto,
    #[serde(rename = "vegetarian")]
    #[sea_orm(string_value = "vegetarian")]
    Vegetarian,
}

impl MealPlanType {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            MealPlanType::Maintenance => "Weight Maintenance",
            MealPlanType::WeightLoss => "Weight Loss",
            MealPlanType::MuscleGain => "Muscle Gain",
            MealPlanType::Diabetic => "Diabetic Diet",
            MealPlanType::Keto => "Keto Diet",
            MealPlanType::Vegetarian => "Vegetarian",
        }
    }
}

impl std::fmt::Display for MealPlanType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealPlanType::Maintenance => write!(fmt, "maintenance"),
            MealPlanType::WeightLoss => write!(fmt, "weight_loss"),
            MealPlanType::MuscleGain => write!(fmt, "muscle_gain"),
            MealPlanType::Diabetic => write!(fmt, "diabetic"),
            MealPlanType::Keto => write!(fmt, "keto"),
            MealPlanType::Vegetarian => write!(fmt, "vegetarian"),
        }
    }
}
