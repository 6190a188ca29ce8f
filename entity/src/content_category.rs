use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Topic of a piece of educational content.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "content_category")]
pub enum ContentCategory {
    #[serde(rename = "workouts")]
    #[sea_orm(string_value = "workouts")]
    #[default]
    Workouts,
    #[serde(rename = "nutrition")]
    #[sea_orm(string_value = "nutrition")]
    Nutrition,
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentCategory::Workouts => write!(fmt, "workouts"),
            ContentCategory::Nutrition => write!(fmt, "nutrition"),
        }
    }
}
