use domain::fitness_plans::Model as FitnessPlanModel;
use domain::meal_plans::Model as MealPlanModel;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FitnessPlanResponse {
    #[serde(flatten)]
    pub plan: FitnessPlanModel,
    pub plan_type_display: &'static str,
    pub difficulty_display: &'static str,
}

impl From<FitnessPlanModel> for FitnessPlanResponse {
    fn from(plan: FitnessPlanModel) -> Self {
        Self {
            plan_type_display: plan.plan_type.label(),
            difficulty_display: plan.difficulty.label(),
            plan,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealPlanResponse {
    #[serde(flatten)]
    pub plan: MealPlanModel,
    pub plan_type_display: &'static str,
}

impl From<MealPlanModel> for MealPlanResponse {
    fn from(plan: MealPlanModel) -> Self {
        Self {
            plan_type_display: plan.plan_type.label(),
            plan,
        }
    }
}
