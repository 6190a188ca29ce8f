use super::error::Error;
use entity::challenge_participants::{ActiveModel, Column, Entity, Model};
use entity::progress::Progress;
use entity::{challenges, Id};
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(
    db: &DatabaseConnection,
    user_id: Id,
    challenge_id: Id,
    date_joined: Date,
) -> Result<Model, Error> {
    debug!("User {user_id} joining challenge {challenge_id}");

    let active_model = ActiveModel {
        user_id: Set(user_id),
        challenge_id: Set(challenge_id),
        date_joined: Set(date_joined),
        progress: Set(Progress::default()),
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

/// A user's participations together with the challenge each one belongs to.
pub async fn find_by_user_with_challenge(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Vec<(Model, Option<challenges::Model>)>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .find_also_related(challenges::Entity)
        .order_by_desc(Column::DateJoined)
        .all(db)
        .await?)
}

pub async fn count_by_user(db: &DatabaseConnection, user_id: Id) -> Result<u64, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .count(db)
        .await?)
}

pub async fn update_progress(
    db: &DatabaseConnection,
    participant: Model,
    progress: Progress,
) -> Result<Model, Error> {
    debug!(
        "Updating progress of challenge participant {} to {:?}",
        participant.id, progress
    );

    let active_model = ActiveModel {
        id: Unchanged(participant.id),
        user_id: Unchanged(participant.user_id),
        challenge_id: Unchanged(participant.challenge_id),
        date_joined: Unchanged(participant.date_joined),
        progress: Set(progress),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    #[tokio::test]
    async fn update_progress_returns_the_stored_days() -> Result<(), Error> {
        let participant = Model {
            id: Id::new_v4(),
            user_id: Id::new_v4(),
            challenge_id: Id::new_v4(),
            date_joined: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            progress: Progress(vec![1]),
        };
        let updated = Model {
            progress: Progress(vec![1, 2]),
            ..participant.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[updated.clone()]])
            .into_connection();

        let result = update_progress(&db, participant, Progress(vec![1, 2])).await?;

        assert_eq!(result.progress, Progress(vec![1, 2]));

        Ok(())
    }

    #[tokio::test]
    async fn delete_by_id_issues_a_delete() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([sea_orm::MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let id = Id::new_v4();
        delete_by_id(&db, id).await?;

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "fitlife"."challenge_participants" WHERE "challenge_participants"."id" = $1"#,
                [id.into()]
            )]
        );

        Ok(())
    }
}
