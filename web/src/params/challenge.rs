use chrono::NaiveDate;
use domain::{
    challenge_muscle_group::ChallengeMuscleGroup, difficulty::Difficulty,
    workout_type::WorkoutType, Id, IntoUpdateMap, UpdateMap,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::set;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<ChallengeMuscleGroup>,
    pub workout_type: Option<WorkoutType>,
    pub image_url: Option<String>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "title", self.title);
        set(&mut update_map, "description", self.description);
        set(&mut update_map, "duration", self.duration);
        set(&mut update_map, "start_date", self.start_date);
        set(&mut update_map, "end_date", self.end_date);
        set(&mut update_map, "difficulty", self.difficulty);
        set(&mut update_map, "muscle_group", self.muscle_group);
        set(&mut update_map, "workout_type", self.workout_type);
        set(&mut update_map, "image_url", self.image_url);
        update_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinParams {
    #[schema(value_type = Uuid)]
    pub challenge_id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Value;

    #[test]
    fn only_supplied_fields_are_updated() {
        let params: UpdateParams = serde_json::from_value(serde_json::json!({
            "title": "Plank Month",
            "difficulty": "advance"
        }))
        .unwrap();

        let update_map = params.into_update_map();

        assert_eq!(
            update_map.get("title"),
            Some(&Value::String(Some(Box::new("Plank Month".to_owned()))))
        );
        assert!(update_map.get("difficulty").is_some());
        assert!(update_map.get("description").is_none());
    }
}
