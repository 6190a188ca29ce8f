use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a user wants to achieve with their goal.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "goal_type")]
pub enum GoalType {
    #[serde(rename = "maintain")]
    #[sea_orm(string_value = "maintain")]
    #[default]
    Maintain,
    #[serde(rename = "lose")]
    #[sea_orm(string_value = "lose")]
    Lose,
    #[serde(rename = "gain")]
    #[sea_orm(string_value = "gain")]
    Gain,
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalType::Maintain => write!(fmt, "maintain"),
            GoalType::Lose => write!(fmt, "lose"),
            GoalType::Gain => write!(fmt, "gain"),
        }
    }
}
