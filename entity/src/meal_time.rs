use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Meal of the day a food portion belongs to.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "meal_time")]
pub enum MealTime {
    #[serde(rename = "breakfast")]
    #[sea_orm(string_value = "breakfast")]
    #[default]
    Breakfast,
    #[serde(rename = "morning_snack")]
    #[sea_orm(string_value = "morning_snack")]
    MorningSnack,
    #[serde(rename = "lunch")]
    #[sea_orm(string_value = "lunch")]
    Lunch,
    #[serde(rename = "afternoon_snack")]
    #[sea_orm(string_value = "afternoon_snack")]
    AfternoonSnack,
    #[serde(rename = "dinner")]
    #[sea_orm(string_value = "dinner")]
    Dinner,
    #[serde(rename = "evening_snack")]
    #[sea_orm(string_value = "evening_snack")]
    EveningSnack,
}

impl MealTime {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::MorningSnack => "Morning Snack",
            MealTime::Lunch => "Lunch",
            MealTime::AfternoonSnack => "Afternoon Snack",
            MealTime::Dinner => "Dinner",
            MealTime::EveningSnack => "Evening Snack",
        }
    }
}

impl std::fmt::Display for MealTime {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealTime::Breakfast => write!(fmt, "breakfast"),
            MealTime::MorningSnack => write!(fmt, "morning_snack"),
            MealTime::Lunch => write!(fmt, "lunch"),
            MealTime::AfternoonSnack => write!(fmt, "afternoon_snack"),
            MealTime::Dinner => write!(fmt, "dinner"),
            MealTime::EveningSnack => write!(fmt, "evening_snack"),
        }
    }
}
