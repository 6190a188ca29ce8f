use super::error::Error;
use entity::challenges::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, challenge_model: Model) -> Result<Model, Error> {
    debug!("New Challenge Model to be inserted: {challenge_model:?}");

    let challenge_active_model = ActiveModel {
        title: Set(challenge_model.title),
        description: Set(challenge_model.description),
        duration: Set(challenge_model.duration),
        start_date: Set(challenge_model.start_date),
        end_date: Set(challenge_model.end_date),
        difficulty: Set(challenge_model.difficulty),
        muscle_group: Set(challenge_model.muscle_group),
        workout_type: Set(challenge_model.workout_type),
        image_url: Set(challenge_model.image_url),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    };

    Ok(challenge_active_model.save(db).await?.try_into_model()?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// Every challenge, newest first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}

/// Challenges running on `today`, bounds inclusive.
pub async fn count_active_on(db: &DatabaseConnection, today: Date) -> Result<u64, Error> {
    Ok(Entity::find()
        .filter(Column::StartDate.lte(today))
        .filter(Column::EndDate.gte(today))
        .count(db)
        .await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let challenge = find_by_id(db, id).await?;
    challenge.delete(db).await?;
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::EntityApiErrorKind;
    use chrono::NaiveDate;
    use entity::{challenge_muscle_group::ChallengeMuscleGroup, difficulty::Difficulty};
    use entity::workout_type::WorkoutType;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn challenge_model() -> Model {
        Model {
            id: Id::new_v4(),
            title: "30 Day Plank".to_owned(),
            description: "Hold a plank every day".to_owned(),
            duration: "30 days".to_owned(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            difficulty: Difficulty::Beginner,
            muscle_group: ChallengeMuscleGroup::Core,
            workout_type: WorkoutType::Strength,
            image_url: None,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn create_returns_a_new_challenge_model() -> Result<(), Error> {
        let challenge_model = challenge_model();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[challenge_model.clone()]])
            .into_connection();

        let challenge = create(&db, challenge_model.clone()).await?;

        assert_eq!(challenge.id, challenge_model.id);
        assert_eq!(challenge.title, challenge_model.title);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_returns_record_not_found_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let result = find_by_id(&db, Id::new_v4()).await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }
}
