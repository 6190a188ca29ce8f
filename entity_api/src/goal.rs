use super::error::Error;
use entity::goals::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn find_by_user(db: &impl ConnectionTrait, user_id: Id) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

/// Inserts `user_id`'s goal, or overwrites it when one already exists.
pub async fn upsert(
    db: &impl ConnectionTrait,
    user_id: Id,
    goal_model: Model,
) -> Result<Model, Error> {
    match find_by_user(db, user_id).await? {
        Some(existing) => {
            debug!("Existing Goal model to be Updated: {existing:?}");

            let active_model = ActiveModel {
                id: Unchanged(existing.id),
                user_id: Unchanged(existing.user_id),
                goal_type: Set(goal_model.goal_type),
                start_date: Set(goal_model.start_date),
                target_date: Set(goal_model.target_date),
                target_weight: Set(goal_model.target_weight),
                activity_level: Set(goal_model.activity_level),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("New Goal Model to be inserted: {goal_model:?}");

            let active_model = ActiveModel {
                user_id: Set(user_id),
                goal_type: Set(goal_model.goal_type),
                start_date: Set(goal_model.start_date),
                target_date: Set(goal_model.target_date),
                target_weight: Set(goal_model.target_weight),
                activity_level: Set(goal_model.activity_level),
                ..Default::default()
            };

            Ok(active_model.save(db).await?.try_into_model()?)
        }
    }
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use entity::{activity_level::ActivityLevel, goal_type::GoalType};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn goal_model(user_id: Id, target_weight: f64) -> Model {
        Model {
            id: Id::new_v4(),
            user_id,
            goal_type: GoalType::Lose,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            target_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            target_weight,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[tokio::test]
    async fn upsert_inserts_when_the_user_has_no_goal() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let goal = goal_model(user_id, 70.0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .append_query_results([[goal.clone()]])
            .into_connection();

        let result = upsert(&db, user_id, goal.clone()).await?;

        assert_eq!(result.id, goal.id);
        assert_eq!(result.target_weight, 70.0);

        Ok(())
    }

    #[tokio::test]
    async fn upsert_updates_the_existing_goal() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let existing = goal_model(user_id, 80.0);
        let updated = Model {
            target_weight: 75.0,
            ..existing.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[updated.clone()]])
            .into_connection();

        let result = upsert(&db, user_id, goal_model(user_id, 75.0)).await?;

        assert_eq!(result.id, existing.id);
        assert_eq!(result.target_weight, 75.0);

        Ok(())
    }
}
