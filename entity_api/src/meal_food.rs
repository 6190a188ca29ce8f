use super::error::Error;
use entity::meal_foods::{ActiveModel, Column, Entity, Model};
use entity::{foods, Id};
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, model: Model) -> Result<Model, Error> {
    debug!("New Meal Food Model to be inserted: {model:?}");

    let active_model = ActiveModel {
        meal_plan_id: Set(model.meal_plan_id),
        food_id: Set(model.food_id),
        meal_time: Set(model.meal_time),
        quantity_grams: Set(model.quantity_grams),
        day: Set(model.day),
        order: Set(model.order),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// Portions of a plan with their food attached, optionally restricted to one day,
/// ordered by day, meal time and position.
pub async fn find_by_plan_with_food(
    db: &DatabaseConnection,
    meal_plan_id: Id,
    day: Option<i32>,
) -> Result<Vec<(Model, Option<foods::Model>)>, Error> {
    let mut query = Entity::find().filter(Column::MealPlanId.eq(meal_plan_id));
    if let Some(day) = day {
        query = query.filter(Column::Day.eq(day));
    }

    Ok(query
        .find_also_related(foods::Entity)
        .order_by_asc(Column::Day)
        .order_by_asc(Column::MealTime)
        .order_by_asc(Column::Order)
        .all(db)
        .await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let meal_food = find_by_id(db, id).await?;
    meal_food.delete(db).await?;
    Ok(())
}
