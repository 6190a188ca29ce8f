use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Difficulty of a challenge or an exercise.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "difficulty")]
pub enum Difficulty {
    #[serde(rename = "intermediate")]
    #[sea_orm(string_value = "intermediate")]
    #[default]
    Intermediate,
    #[serde(rename = "beginner")]
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[serde(rename = "advance")]
    #[sea_orm(string_value = "advance")]
    Advance,
}

impl Difficulty {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Beginner => "Beginner",
            Difficulty::Advance => "Advance",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Intermediate => write!(fmt, "intermediate"),
            Difficulty::Beginner => write!(fmt, "beginner"),
            Difficulty::Advance => write!(fmt, "advance"),
        }
    }
}
