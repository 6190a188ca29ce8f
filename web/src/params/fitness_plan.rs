use domain::{
    activity_level::ActivityLevel, fitness_plan_exercises::Model as PlanExerciseModel,
    fitness_plan_type::FitnessPlanType, fitness_plans::Model, week_day::WeekDay, Id,
    IntoQueryFilterMap, IntoUpdateMap, QueryFilterMap, UpdateMap,
};
use sea_orm::Value;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::set;

fn default_sets() -> i32 {
    3
}

fn default_reps() -> i32 {
    10
}

/// An exercise scheduled inline while the plan is created.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NestedExercise {
    #[schema(value_type = Uuid)]
    pub exercise_id: Id,
    pub day: WeekDay,
    #[serde(default = "default_sets")]
    pub sets: i32,
    #[serde(default = "default_reps")]
    pub reps: i32,
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub order: i32,
}

impl From<NestedExercise> for PlanExerciseModel {
    // The plan id is assigned once the plan exists.
    fn from(nested: NestedExercise) -> Self {
        PlanExerciseModel {
            id: Id::nil(),
            fitness_plan_id: Id::nil(),
            exercise_id: nested.exercise_id,
            day: nested.day,
            sets: nested.sets,
            reps: nested.reps,
            duration_minutes: nested.duration_minutes,
            order: nested.order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateParams {
    #[serde(flatten)]
    pub plan: Model,
    #[serde(default)]
    pub exercises: Vec<NestedExercise>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub plan_type: Option<FitnessPlanType>,
    pub duration_weeks: Option<i32>,
    pub difficulty: Option<ActivityLevel>,
    pub picture_url: Option<String>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "name", self.name);
        set(&mut update_map, "description", self.description);
        set(&mut update_map, "plan_type", self.plan_type);
        set(&mut update_map, "duration_weeks", self.duration_weeks);
        set(&mut update_map, "difficulty", self.difficulty);
        set(&mut update_map, "picture_url", self.picture_url);
        update_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExerciseParams {
    #[schema(value_type = Option<Uuid>)]
    pub exercise_id: Option<Id>,
    pub day: Option<WeekDay>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub order: Option<i32>,
}

impl IntoUpdateMap for UpdateExerciseParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "exercise_id", self.exercise_id);
        set(&mut update_map, "day", self.day);
        set(&mut update_map, "sets", self.sets);
        set(&mut update_map, "reps", self.reps);
        set(&mut update_map, "duration_minutes", self.duration_minutes);
        set(&mut update_map, "order", self.order);
        update_map
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct ExerciseIndexParams {
    #[serde(alias = "plan_id")]
    #[param(value_type = Option<Uuid>)]
    pub(crate) fitness_plan_id: Option<Id>,
    pub(crate) day: Option<WeekDay>,
}

impl IntoQueryFilterMap for ExerciseIndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        if let Some(fitness_plan_id) = self.fitness_plan_id {
            query_filter_map.insert(
                "fitness_plan_id".to_string(),
                Some(Value::Uuid(Some(Box::new(fitness_plan_id)))),
            );
        }
        if let Some(day) = self.day {
            query_filter_map.insert("day".to_string(), Some(day.into()));
        }
        query_filter_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinParams {
    #[schema(value_type = Uuid)]
    pub fitness_plan_id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_default_nested_sets_and_reps() {
        let params: CreateParams = serde_json::from_value(serde_json::json!({
            "name": "Couch to 5k",
            "description": null,
            "plan_type": "endurance",
            "duration_weeks": 8,
            "difficulty": "light",
            "picture_url": null,
            "exercises": [{"exercise_id": Id::nil(), "day": "monday"}]
        }))
        .unwrap();

        assert_eq!(params.plan.duration_weeks, 8);
        let exercise = PlanExerciseModel::from(params.exercises.into_iter().next().unwrap());
        assert_eq!((exercise.sets, exercise.reps), (3, 10));
    }

    #[test]
    fn exercise_filters_accept_plan_id_alias() {
        let plan_id = Id::new_v4();
        let params: ExerciseIndexParams =
            serde_json::from_value(serde_json::json!({ "plan_id": plan_id })).unwrap();

        let filters = params.into_query_filter_map();

        assert_eq!(
            filters.get("fitness_plan_id"),
            Some(Value::Uuid(Some(Box::new(plan_id))))
        );
        assert!(filters.get("day").is_none());
    }
}
