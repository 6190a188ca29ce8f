use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Muscle group an exercise trains.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "muscle_group")]
pub enum MuscleGroup {
    #[serde(rename = "fullbody")]
    #[sea_orm(string_value = "fullbody")]
    #[default]
    FullBody,
    #[serde(rename = "chest")]
    #[sea_orm(string_value = "chest")]
    Chest,
    #[serde(rename = "back")]
    #[sea_orm(string_value = "back")]
    Back,
    #[serde(rename = "legs")]
    #[sea_orm(string_value = "legs")]
    Legs,
    #[serde(rename = "shoulders")]
    #[sea_orm(string_value = "shoulders")]
    Shoulders,
    #[serde(rename = "arms")]
    #[sea_orm(string_value = "arms")]
    Arms,
    #[serde(rename = "core")]
    #[sea_orm(string_value = "core")]
    Core,
}

impl MuscleGroup {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::FullBody => "Full Body Exercise",
            MuscleGroup::Chest => "Chest Exercise",
            MuscleGroup::Back => "Back Exercise",
            MuscleGroup::Legs => "Leg Exercise",
            MuscleGroup::Shoulders => "Deltoids Exercise",
            MuscleGroup::Arms => "Arm Exercise",
            MuscleGroup::Core => "Core Exercise",
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MuscleGroup::FullBody => write!(fmt, "fullbody"),
            MuscleGroup::Chest => write!(fmt, "chest"),
            MuscleGroup::Back => write!(fmt, "back"),
            MuscleGroup::Legs => write!(fmt, "legs"),
            MuscleGroup::Shoulders => write!(fmt, "shoulders"),
            MuscleGroup::Arms => write!(fmt, "arms"),
            MuscleGroup::Core => write!(fmt, "core"),
        }
    }
}
