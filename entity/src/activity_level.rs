use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weekly activity level.
///
/// Doubles as the difficulty of a fitness plan and as the activity level a
/// user declares when setting up a goal.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "activity_level")]
pub enum ActivityLevel {
    #[serde(rename = "moderate")]
    #[sea_orm(string_value = "moderate")]
    #[default]
    Moderate,
    #[serde(rename = "sedentary")]
    #[sea_orm(string_value = "sedentary")]
    Sedentary,
    #[serde(rename = "light")]
    #[sea_orm(string_value = "light")]
    Light,
    #[serde(rename = "active")]
    #[sea_orm(string_value = "active")]
    Active,
    #[serde(rename = "very_active")]
    #[sea_orm(string_value = "very_active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Very Easy (Sedentary: little to no exercise)",
            ActivityLevel::Light => "Easy (Light: 1-3 times/week)",
            ActivityLevel::Moderate => "Normal (Moderate: 3-5 times/week)",
            ActivityLevel::Active => "Hard (Active: 6-7 times/week)",
            ActivityLevel::VeryActive => "Very Hard (Very Active: 2x/day)",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::Moderate => write!(fmt, "moderate"),
            ActivityLevel::Sedentary => write!(fmt, "sedentary"),
            ActivityLevel::Light => write!(fmt, "light"),
            ActivityLevel::Active => write!(fmt, "active"),
            ActivityLevel::VeryActive => write!(fmt, "very_active"),
        }
    }
}
