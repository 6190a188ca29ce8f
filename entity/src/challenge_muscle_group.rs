use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Muscle group a challenge focuses on.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "challenge_muscle_group")]
pub enum ChallengeMuscleGroup {
    #[serde(rename = "full-body")]
    #[sea_orm(string_value = "full-body")]
    #[default]
    FullBody,
    #[serde(rename = "chest")]
    #[sea_orm(string_value = "chest")]
    Chest,
    #[serde(rename = "core")]
    #[sea_orm(string_value = "core")]
    Core,
}

impl std::fmt::Display for ChallengeMuscleGroup {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChallengeMuscleGroup::FullBody => write!(fmt, "full-body"),
            ChallengeMuscleGroup::Chest => write!(fmt, "chest"),
            ChallengeMuscleGroup::Core => write!(fmt, "core"),
        }
    }
}
