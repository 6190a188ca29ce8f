use domain::{food_type::FoodType, IntoUpdateMap, UpdateMap};
use serde::Deserialize;
use utoipa::ToSchema;

use super::set;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub carbs: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub food_type: Option<FoodType>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "name", self.name);
        set(&mut update_map, "description", self.description);
        set(&mut update_map, "image_url", self.image_url);
        set(&mut update_map, "carbs", self.carbs);
        set(&mut update_map, "protein", self.protein);
        set(&mut update_map, "fat", self.fat);
        set(&mut update_map, "food_type", self.food_type);
        update_map
    }
}
