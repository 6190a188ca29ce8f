use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Specialization of an instructor.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "specialization")]
pub enum Specialization {
    #[serde(rename = "trainer")]
    #[sea_orm(string_value = "trainer")]
    #[default]
    Trainer,
    #[serde(rename = "nutritionist")]
    #[sea_orm(string_value = "nutritionist")]
    Nutritionist,
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Specialization::Trainer => write!(fmt, "trainer"),
            Specialization::Nutritionist => write!(fmt, "nutritionist"),
        }
    }
}
