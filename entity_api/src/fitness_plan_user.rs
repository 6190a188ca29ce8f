use super::error::Error;
use entity::fitness_plan_users::{ActiveModel, Column, Entity, Model};
use entity::progress::Progress;
use entity::{fitness_plans, users, Id};
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, QueryOrder, QuerySelect, TryIntoModel,
};

use log::*;

pub async fn create(
    db: &DatabaseConnection,
    user_id: Id,
    fitness_plan_id: Id,
) -> Result<Model, Error> {
    debug!("User {user_id} joining fitness plan {fitness_plan_id}");

    let active_model = ActiveModel {
        user_id: Set(user_id),
        fitness_plan_id: Set(fitness_plan_id),
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
) -> Result<Vec<(Model, Option<fitness_plans::Model>)>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .find_also_related(fitness_plans::Entity)
        .order_by_desc(Column::JoinedAt)
        .all(db)
        .await?)
}

pub async fn find_by_user_and_plan(
    db: &DatabaseConnection,
    user_id: Id,
    fitness_plan_id: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::FitnessPlanId.eq(fitness_plan_id))
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

/// Joins at or after `since`, newest first, each with the joining user's email and
/// the plan's name.
pub async fn find_joined_since(
    db: &DatabaseConnection,
    since: DateTimeWithTimeZone,
    limit: u64,
) -> Result<Vec<(Model, String, String)>, Error> {
    let joins = Entity::find()
        .filter(Column::JoinedAt.gte(since))
        .find_also_related(fitness_plans::Entity)
        .order_by_desc(Column::JoinedAt)
        .limit(limit)
        .all(db)
        .await?;

    let mut results = Vec::with_capacity(joins.len());
    for (join, plan) in joins {
        let email = users::Entity::find_by_id(join.user_id)
            .one(db)
            .await?
            .map(|user| user.email)
            .unwrap_or_default();
        let plan_name = plan.map(|plan| plan.name).unwrap_or_default();
        results.push((join, email, plan_name));
    }

    Ok(results)
}

pub async fn update_progress(
    db: &DatabaseConnection,
    participation: Model,
    progress: Progress,
) -> Result<Model, Error> {
    let active_model = ActiveModel {
        id: Unchanged(participation.id),
        user_id: Unchanged(participation.user_id),
        fitness_plan_id: Unchanged(participation.fitness_plan_id),
        progress: Set(progress),
        joined_at: Unchanged(participation.joined_at),
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
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    #[tokio::test]
    async fn find_by_user_and_plan_filters_on_both_ids() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let user_id = Id::new_v4();
        let plan_id = Id::new_v4();
        let result = find_by_user_and_plan(&db, user_id, plan_id).await?;

        assert!(result.is_none());
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "fitness_plan_users"."id", "fitness_plan_users"."user_id", "fitness_plan_users"."fitness_plan_id", "fitness_plan_users"."progress", "fitness_plan_users"."joined_at" FROM "fitlife"."fitness_plan_users" WHERE "fitness_plan_users"."user_id" = $1 AND "fitness_plan_users"."fitness_plan_id" = $2 LIMIT $3"#,
                [user_id.into(), plan_id.into(), 1u64.into()]
            )]
        );

        Ok(())
    }
}
