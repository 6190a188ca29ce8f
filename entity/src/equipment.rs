use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Equipment needed to perform an exercise.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "equipment")]
pub enum Equipment {
    #[serde(rename = "none")]
    #[sea_orm(string_value = "none")]
    #[default]
    NoEquipment,
    #[serde(rename = "dumbells")]
    #[sea_orm(string_value = "dumbells")]
    Dumbells,
    #[serde(rename = "pull_up")]
    #[sea_orm(string_value = "pull_up")]
    PullUp,
    #[serde(rename = "others")]
    #[sea_orm(string_value = "others")]
    Others,
}

impl Equipment {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Equipment::NoEquipment => "No Equipment Needed",
            Equipment::Dumbells => "Dumbells",
            Equipment::PullUp => "Pull Up Bar",
            Equipment::Others => "Others",
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Equipment::NoEquipment => write!(fmt, "none"),
            Equipment::Dumbells => write!(fmt, "dumbells"),
            Equipment::PullUp => write!(fmt, "pull_up"),
            Equipment::Others => write!(fmt, "others"),
        }
    }
}
