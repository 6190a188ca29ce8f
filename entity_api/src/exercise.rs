use super::error::Error;
use entity::exercises::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, exercise_model: Model) -> Result<Model, Error> {
    debug!("New Exercise Model to be inserted: {exercise_model:?}");

    let active_model = ActiveModel {
        name: Set(exercise_model.name),
        description: Set(exercise_model.description),
        image_url: Set(exercise_model.image_url),
        calories_burned: Set(exercise_model.calories_burned),
        muscle_group: Set(exercise_model.muscle_group),
        difficulty: Set(exercise_model.difficulty),
        equipment: Set(exercise_model.equipment),
        created_at: Set(chrono::Utc::now().into()),
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

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().order_by_asc(Column::Name).all(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let exercise = find_by_id(db, id).await?;
    exercise.delete(db).await?;
    Ok(())
}
