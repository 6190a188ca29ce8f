use super::error::Error;
use entity::fitness_plan_exercises::{ActiveModel, Column, Entity, Model};
use entity::{exercises, Id};
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ConnectionTrait, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, model: Model) -> Result<Model, Error> {
    debug!("New Fitness Plan Exercise Model to be inserted: {model:?}");

    let active_model = ActiveModel {
        fitness_plan_id: Set(model.fitness_plan_id),
        exercise_id: Set(model.exercise_id),
        day: Set(model.day),
        sets: Set(model.sets),
        reps: Set(model.reps),
        duration_minutes: Set(model.duration_minutes),
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

/// A plan's schedule with each exercise attached, ordered by day then position.
pub async fn find_by_plan_with_exercise(
    db: &DatabaseConnection,
    fitness_plan_id: Id,
) -> Result<Vec<(Model, Option<exercises::Model>)>, Error> {
    Ok(Entity::find()
        .filter(Column::FitnessPlanId.eq(fitness_plan_id))
        .find_also_related(exercises::Entity)
        .order_by_asc(Column::Day)
        .order_by_asc(Column::Order)
        .all(db)
        .await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let plan_exercise = find_by_id(db, id).await?;
    plan_exercise.delete(db).await?;
    Ok(())
}
