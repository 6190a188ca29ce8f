use domain::exercises::Model as ExerciseModel;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExerciseResponse {
    #[serde(flatten)]
    pub exercise: ExerciseModel,
    pub muscle_group_display: &'static str,
    pub difficulty_display: &'static str,
    pub equipment_display: &'static str,
}

impl From<ExerciseModel> for ExerciseResponse {
    fn from(exercise: ExerciseModel) -> Self {
        Self {
            muscle_group_display: exercise.muscle_group.label(),
            difficulty_display: exercise.difficulty.label(),
            equipment_display: exercise.equipment.label(),
            exercise,
        }
    }
}
