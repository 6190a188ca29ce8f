use crate::error::Error;
use crate::exercises::{ActiveModel, Column, Model};
use crate::Id;
use entity_api::{exercise, mutate, IntoUpdateMap};
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::exercise::{delete_by_id, find_all, find_by_id};

fn validate(exercise: &Model) -> Result<(), Error> {
    let name = exercise.name.trim();
    if name.is_empty() {
        return Err(Error::validation("Name is required."));
    }
    if name.chars().count() > 40 {
        return Err(Error::validation("Name cannot be longer than 40 characters."));
    }
    if exercise.calories_burned.is_some_and(|calories| calories < 0.0) {
        return Err(Error::validation("Calories burned cannot be negative."));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, exercise_model: Model) -> Result<Model, Error> {
    validate(&exercise_model)?;
    Ok(exercise::create(db, exercise_model).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, id).await?;
    let active_model =
        mutate::apply::<ActiveModel, Column>(existing.into_active_model(), &params.into_update_map());
    validate(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}
