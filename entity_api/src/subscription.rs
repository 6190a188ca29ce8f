use super::error::Error;
use entity::subscription_tier::SubscriptionTier;
use entity::subscriptions::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    Condition, DatabaseConnection, TryIntoModel,
};

use log::*;

/// The values written when a subscription starts or renews.
#[derive(Debug, Clone)]
pub struct SubscriptionTerms {
    pub plan: SubscriptionTier,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub trainer_id: Option<Id>,
    pub nutritionist_id: Option<Id>,
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_by_user(db: &DatabaseConnection, user_id: Id) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .one(db)
        .await?)
}

/// Subscriptions naming `instructor_id` as trainer or nutritionist.
pub async fn find_by_instructor(
    db: &DatabaseConnection,
    instructor_id: Id,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(
            Condition::any()
                .add(Column::TrainerId.eq(instructor_id))
                .add(Column::NutritionistId.eq(instructor_id)),
        )
        .all(db)
        .await?)
}

/// Starts a subscription for `user_id` or overwrites the existing one with `terms`.
/// The subscription is always active afterwards.
pub async fn activate(
    db: &DatabaseConnection,
    user_id: Id,
    terms: SubscriptionTerms,
) -> Result<Model, Error> {
    match find_by_user(db, user_id).await? {
        Some(existing) => {
            debug!("Refreshing subscription {} with {terms:?}", existing.id);

            let active_model = ActiveModel {
                id: Unchanged(existing.id),
                user_id: Unchanged(existing.user_id),
                plan: Set(terms.plan),
                is_active: Set(true),
                start_date: Set(terms.start_date),
                end_date: Set(Some(terms.end_date)),
                trainer_id: Set(terms.trainer_id),
                nutritionist_id: Set(terms.nutritionist_id),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("New subscription for user {user_id} with {terms:?}");

            let active_model = ActiveModel {
                user_id: Set(user_id),
                plan: Set(terms.plan),
                is_active: Set(true),
                start_date: Set(terms.start_date),
                end_date: Set(Some(terms.end_date)),
                trainer_id: Set(terms.trainer_id),
                nutritionist_id: Set(terms.nutritionist_id),
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
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn activate_inserts_an_active_subscription_for_a_new_subscriber() -> Result<(), Error> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let user_id = Id::new_v4();
        let stored = Model {
            id: Id::new_v4(),
            user_id,
            plan: SubscriptionTier::Premium,
            is_active: true,
            start_date: now,
            end_date: Some(now + chrono::Duration::days(30)),
            trainer_id: None,
            nutritionist_id: None,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .append_query_results([[stored.clone()]])
            .into_connection();

        let subscription = activate(
            &db,
            user_id,
            SubscriptionTerms {
                plan: SubscriptionTier::Premium,
                start_date: now,
                end_date: now + chrono::Duration::days(30),
                trainer_id: None,
                nutritionist_id: None,
            },
        )
        .await?;

        assert!(subscription.is_active);
        assert_eq!(subscription.user_id, user_id);

        Ok(())
    }
}
