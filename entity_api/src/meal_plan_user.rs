use super::error::Error;
use entity::meal_plan_users::{ActiveModel, Column, Entity, Model};
use entity::progress::Progress;
use entity::{meal_plans, Id};
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(
    db: &DatabaseConnection,
    user_id: Id,
    meal_plan_id: Id,
) -> Result<Model, Error> {
    debug!("User {user_id} joining meal plan {meal_plan_id}");

    let active_model = ActiveModel {
        user_id: Set(user_id),
        meal_plan_id: Set(meal_plan_id),
        progress: Set(Progress::default()),
        joined_at: Set(chrono::Utc::now().into()),
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

pub async fn find_by_user_with_plan(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Vec<(Model, Option<meal_plans::Model>)>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .find_also_related(meal_plans::Entity)
        .order_by_desc(Column::JoinedAt)
        .all(db)
        .await?)
}

pub async fn find_by_user_and_plan(
    db: &DatabaseConnection,
    user_id: Id,
    meal_plan_id: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::MealPlanId.eq(meal_plan_id))
        .one(db)
        .await?)
}

pub async fn count_by_user(db: &DatabaseConnection, user_id: Id) -> Result<u64, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .count(db)
        .await?)
}

pub async fn count_all(db: &DatabaseConnection) -> Result<u64, Error> {
    Ok(Entity::find().count(db).await?)
}

pub async fn update_progress(
    db: &DatabaseConnection,
    participation: Model,
    progress: Progress,
) -> Result<Model, Error> {
    let active_model = ActiveModel {
        id: Unchanged(participation.id),
        user_id: Unchanged(participation.user_id),
        meal_plan_id: Unchanged(participation.meal_plan_id),
        progress: Set(progress),
        joined_at: Unchanged(participation.joined_at),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
