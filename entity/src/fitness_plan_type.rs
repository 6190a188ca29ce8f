use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Objective of a fitness plan.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "fitness_plan_type")]
pub enum FitnessPlanType {
    #[serde(rename = "weight_loss")]
    #[sea_orm(string_value = "weight_loss")]
    #[default]
    WeightLoss,
    #[serde(rename = "muscle_gain")]
    #[sea_orm(string_value = "muscle_gain")]
    MuscleGain,
    #[serde(rename = "endurance")]
    #[sea_orm(string_value = "endurance")]
    Endurance,
    #[serde(rename = "maintain")]
    #[sea_orm(string_value = "maintain")]
    Maintain,
}

impl FitnessPlanType {
    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            FitnessPlanType::WeightLoss => "Weight Loss",
            FitnessPlanType::MuscleGain => "Muscle Gain",
            FitnessPlanType::Endurance => "Endurance Training",
            FitnessPlanType::Maintain => "Maintain Weight",
        }
    }
}

impl std::fmt::Display for FitnessPlanType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitnessPlanType::WeightLoss => write!(fmt, "weight_loss"),
            FitnessPlanType::MuscleGain => write!(fmt, "muscle_gain"),
            FitnessPlanType::Endurance => write!(fmt, "endurance"),
            FitnessPlanType::Maintain => write!(fmt, "maintain"),
        }
    }
}
