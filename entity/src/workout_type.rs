use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of workout a challenge asks for.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "workout_type")]
pub enum WorkoutType {
    #[serde(rename = "strength")]
    #[sea_orm(string_value = "strength")]
    #[default]
    Strength,
    #[serde(rename = "cardio")]
    #[sea_orm(string_value = "cardio")]
    Cardio,
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Strength => write!(fmt, "strength"),
            WorkoutType::Cardio => write!(fmt, "cardio"),
        }
    }
}
