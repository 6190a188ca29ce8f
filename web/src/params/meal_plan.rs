use domain::{
    meal_plan_type::MealPlanType, meal_time::MealTime, Id, IntoQueryFilterMap, IntoUpdateMap,
    QueryFilterMap, UpdateMap,
};
use sea_orm::Value;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::set;

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    #[serde(rename = "type")]
    pub(crate) plan_type: Option<MealPlanType>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub plan_type: Option<MealPlanType>,
    pub daily_calorie_target: Option<i32>,
    pub duration_weeks: Option<i32>,
    pub image_url: Option<String>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "name", self.name);
        set(&mut update_map, "description", self.description);
        set(&mut update_map, "plan_type", self.plan_type);
        set(&mut update_map, "daily_calorie_target", self.daily_calorie_target);
        set(&mut update_map, "duration_weeks", self.duration_weeks);
        set(&mut update_map, "image_url", self.image_url);
        update_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMealFoodParams {
    #[schema(value_type = Option<Uuid>)]
    pub food_id: Option<Id>,
    pub meal_time: Option<MealTime>,
    pub quantity_grams: Option<f64>,
    pub day: Option<i32>,
    pub order: Option<i32>,
}

impl IntoUpdateMap for UpdateMealFoodParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "food_id", self.food_id);
        set(&mut update_map, "meal_time", self.meal_time);
        set(&mut update_map, "quantity_grams", self.quantity_grams);
        set(&mut update_map, "day", self.day);
        set(&mut update_map, "order", self.order);
        update_map
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct MealFoodIndexParams {
    #[serde(alias = "plan_id")]
    #[param(value_type = Option<Uuid>)]
    pub(crate) meal_plan_id: Option<Id>,
    pub(crate) day: Option<i32>,
    pub(crate) meal_time: Option<MealTime>,
}

impl IntoQueryFilterMap for MealFoodIndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        if let Some(meal_plan_id) = self.meal_plan_id {
            query_filter_map.insert(
                "meal_plan_id".to_string(),
                Some(Value::Uuid(Some(Box::new(meal_plan_id)))),
            );
        }
        if let Some(day) = self.day {
            query_filter_map.insert("day".to_string(), Some(Value::Int(Some(day))));
        }
        if let Some(meal_time) = self.meal_time {
            query_filter_map.insert("meal_time".to_string(), Some(meal_time.into()));
        }
        query_filter_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinParams {
    #[schema(value_type = Uuid)]
    pub meal_plan_id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_params_read_the_type_query_key() {
        let params: IndexParams =
            serde_json::from_value(serde_json::json!({ "type": "keto" })).unwrap();
        assert_eq!(params.plan_type, Some(MealPlanType::Keto));
    }

    #[test]
    fn meal_food_filters_include_only_supplied_terms() {
        let params: MealFoodIndexParams =
            serde_json::from_value(serde_json::json!({ "day": 3, "meal_time": "lunch" })).unwrap();

        let filters = params.into_query_filter_map();

        assert_eq!(filters.get("day"), Some(Value::Int(Some(3))));
        assert!(filters.get("meal_time").is_some());
        assert!(filters.get("meal_plan_id").is_none());
    }
}
