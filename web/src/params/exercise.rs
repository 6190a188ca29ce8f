use domain::{
    difficulty::Difficulty, equipment::Equipment, muscle_group::MuscleGroup, IntoUpdateMap,
    UpdateMap,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::set;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub calories_burned: Option<f64>,
    pub muscle_group: Option<MuscleGroup>,
    pub difficulty: Option<Difficulty>,
    pub equipment: Option<Equipment>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "name", self.name);
        set(&mut update_map, "description", self.description);
        set(&mut update_map, "image_url", self.image_url);
        set(&mut update_map, "calories_burned", self.calories_burned);
        set(&mut update_map, "muscle_group", self.muscle_group);
        set(&mut update_map, "difficulty", self.difficulty);
        set(&mut update_map, "equipment", self.equipment);
        update_map
    }
}
