use chrono::NaiveDate;
use domain::{activity_level::ActivityLevel, goal::GoalInput, goal_type::GoalType};
use serde::Deserialize;
use utoipa::ToSchema;

/// The goal form also carries body metrics, which are stored on the profile.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GoalParams {
    #[serde(default)]
    pub goal_type: GoalType,
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub target_date: NaiveDate,
    pub target_weight: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub current_weight: Option<f64>,
}

impl From<GoalParams> for GoalInput {
    fn from(params: GoalParams) -> Self {
        GoalInput {
            goal_type: params.goal_type,
            start_date: params.start_date,
            target_date: params.target_date,
            target_weight: params.target_weight,
            activity_level: params.activity_level,
            age: params.age,
            height: params.height,
            current_weight: params.current_weight,
        }
    }
}
