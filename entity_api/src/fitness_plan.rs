use super::error::Error;
use entity::fitness_plans::{ActiveModel, Column, Entity, Model};
use entity::{fitness_plan_exercises, Id};
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ConnectionTrait, DatabaseConnection, QueryOrder,
    TransactionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, plan_model: Model) -> Result<Model, Error> {
    debug!("New Fitness Plan Model to be inserted: {plan_model:?}");

    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        name: Set(plan_model.name),
        description: Set(plan_model.description),
        plan_type: Set(plan_model.plan_type),
        duration_weeks: Set(plan_model.duration_weeks),
        difficulty: Set(plan_model.difficulty),
        picture_url: Set(plan_model.picture_url),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

/// Creates the plan and its scheduled exercises in a single transaction. The
/// `fitness_plan_id` of each exercise is replaced with the new plan's id.
pub async fn create_with_exercises(
    db: &DatabaseConnection,
    plan_model: Model,
    exercises: Vec<fitness_plan_exercises::Model>,
) -> Result<(Model, Vec<fitness_plan_exercises::Model>), Error> {
    let txn = db.begin().await?;

    let plan = create(&txn, plan_model).await?;
    let mut created = Vec::with_capacity(exercises.len());
    for exercise in exercises {
        let exercise = fitness_plan_exercises::Model {
            fitness_plan_id: plan.id,
            ..exercise
        };
        created.push(crate::fitness_plan_exercise::create(&txn, exercise).await?);
    }

    txn.commit().await?;

    Ok((plan, created))
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
    let plan = find_by_id(db, id).await?;
    plan.delete(db).await?;
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use entity::{
        activity_level::ActivityLevel, fitness_plan_type::FitnessPlanType, week_day::WeekDay,
    };
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_with_exercises_links_every_exercise_to_the_new_plan() -> Result<(), Error> {
        let now = chrono::Utc::now();
        let plan_model = Model {
            id: Id::new_v4(),
            name: "Beginner Strength".to_owned(),
            description: None,
            plan_type: FitnessPlanType::MuscleGain,
            duration_weeks: 4,
            difficulty: ActivityLevel::Light,
            picture_url: None,
            created_at: now.into(),
            updated_at: now.into(),
        };
        let exercise_model = fitness_plan_exercises::Model {
            id: Id::new_v4(),
            fitness_plan_id: Id::nil(),
            exercise_id: Id::new_v4(),
            day: WeekDay::Monday,
            sets: 3,
            reps: 10,
            duration_minutes: None,
            order: 0,
        };
        let stored_exercise = fitness_plan_exercises::Model {
            fitness_plan_id: plan_model.id,
            ..exercise_model.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan_model.clone()]])
            .append_query_results([[stored_exercise.clone()]])
            .into_connection();

        let (plan, exercises) =
            create_with_exercises(&db, plan_model.clone(), vec![exercise_model]).await?;

        assert_eq!(plan.id, plan_model.id);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].fitness_plan_id, plan_model.id);

        Ok(())
    }
}
