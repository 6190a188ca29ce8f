use super::error::Error;
use entity::meal_plan_type::MealPlanType;
use entity::meal_plans::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, plan_model: Model) -> Result<Model, Error> {
    debug!("New Meal Plan Model to be inserted: {plan_model:?}");

    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        name: Set(plan_model.name),
        description: Set(plan_model.description),
        plan_type: Set(plan_model.plan_type),
        daily_calorie_target: Set(plan_model.daily_calorie_target),
        duration_weeks: Set(plan_model.duration_weeks),
        image_url: Set(plan_model.image_url),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
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

/// Every meal plan, optionally restricted to one plan type, ordered by name.
pub async fn find_all(
    db: &DatabaseConnection,
    plan_type: Option<MealPlanType>,
) -> Result<Vec<Model>, Error> {
    let mut query = Entity::find();
    if let Some(plan_type) = plan_type {
        query = query.filter(Column::PlanType.eq(plan_type));
    }

    Ok(query.order_by_asc(Column::Name).all(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let plan = find_by_id(db, id).await?;
    plan.delete(db).await?;
    Ok(())
}
