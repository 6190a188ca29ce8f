use domain::foods::Model as FoodModel;
use serde::Serialize;
use utoipa::ToSchema;

use super::round2;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FoodResponse {
    #[serde(flatten)]
    pub food: FoodModel,
    /// kcal per 100 g
    pub calories: f64,
    pub food_type_display: &'static str,
}

impl From<FoodModel> for FoodResponse {
    fn from(food: FoodModel) -> Self {
        Self {
            calories: round2(food.calories()),
            food_type_display: food.food_type.label(),
            food,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{food_type::FoodType, Id};
    use serde_json::json;

    #[test]
    fn serializes_the_food_with_calories_and_label() {
        let food = FoodModel {
            id: Id::new_v4(),
            name: "Oats".to_owned(),
            description: None,
            image_url: None,
            carbs: Some(66.3),
            protein: 16.9,
            fat: 6.9,
            food_type: FoodType::Grain,
            created_at: Utc::now().into(),
        };

        let value = serde_json::to_value(FoodResponse::from(food)).unwrap();

        assert_eq!(value["name"], json!("Oats"));
        assert_eq!(value["calories"], json!(394.9));
        assert_eq!(value["food_type"], json!("grain"));
        assert_eq!(value["food_type_display"], json!("Grain / Cereal"));
    }
}
