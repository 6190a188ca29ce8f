use crate::error::Error;
use crate::specialization::Specialization;
use crate::subscription_tier::SubscriptionTier;
use crate::subscriptions::Model;
use crate::users::Model as UserModel;
use crate::Id;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use entity_api::subscription::{self, SubscriptionTerms};
use entity_api::user;
use log::*;
use rand::seq::SliceRandom;
use sea_orm::DatabaseConnection;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionStatus {
    #[serde(flatten)]
    pub subscription: Model,
    pub is_expired: bool,
}

impl SubscriptionStatus {
    fn at(subscription: Model, now: DateTime<FixedOffset>) -> Self {
        let is_expired = subscription.is_expired_at(now);
        Self {
            subscription,
            is_expired,
        }
    }
}

fn pick_one(instructors: &[UserModel]) -> Option<Id> {
    instructors
        .choose(&mut rand::thread_rng())
        .map(|instructor| instructor.id)
}

async fn pick_instructor(
    db: &DatabaseConnection,
    specialization: Specialization,
) -> Result<Option<Id>, Error> {
    let instructors = user::find_instructors_by_specialization(db, specialization).await?;
    Ok(pick_one(&instructors))
}

async fn terms_for(
    db: &DatabaseConnection,
    plan: SubscriptionTier,
    days: i64,
) -> Result<SubscriptionTerms, Error> {
    let now = Utc::now();
    let (trainer_id, nutritionist_id) = match plan {
        SubscriptionTier::Premium => (
            pick_instructor(db, Specialization::Trainer).await?,
            pick_instructor(db, Specialization::Nutritionist).await?,
        ),
    };

    Ok(SubscriptionTerms {
        plan,
        start_date: now.into(),
        end_date: (now + Duration::days(days)).into(),
        trainer_id,
        nutritionist_id,
    })
}

/// Starts or refreshes `user_id`'s subscription for `days` days. Premium subscribers
/// get a random trainer and nutritionist when any are available.
pub async fn subscribe(
    db: &DatabaseConnection,
    user_id: Id,
    plan: Option<SubscriptionTier>,
    days: i64,
) -> Result<SubscriptionStatus, Error> {
    let plan = plan.ok_or_else(|| Error::validation("Plan is required."))?;
    let terms = terms_for(db, plan, days).await?;

    let subscription = subscription::activate(db, user_id, terms).await?;
    info!(
        "User {user_id} subscribed to {} until {:?}",
        subscription.plan, subscription.end_date
    );

    Ok(SubscriptionStatus::at(subscription, Utc::now().into()))
}

/// The caller's subscription as a list of zero or one entries.
pub async fn find_mine(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Vec<SubscriptionStatus>, Error> {
    let now = Utc::now().into();
    Ok(subscription::find_by_user(db, user_id)
        .await?
        .map(|subscription| SubscriptionStatus::at(subscription, now))
        .into_iter()
        .collect())
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
) -> Result<SubscriptionStatus, Error> {
    let subscription = subscription::find_by_id(db, id).await?;
    if subscription.user_id != user_id {
        return Err(Error::not_found("Subscription not found"));
    }
    Ok(SubscriptionStatus::at(subscription, Utc::now().into()))
}

/// Renews an expired or inactive subscription on the same plan.
pub async fn renew(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
    days: i64,
) -> Result<SubscriptionStatus, Error> {
    let current = find_by_id(db, user_id, id).await?;
    if current.subscription.is_active && !current.is_expired {
        return Err(Error::validation("Subscription is still active."));
    }

    let mut terms = terms_for(db, current.subscription.plan.clone(), days).await?;
    terms.trainer_id = current.subscription.trainer_id.or(terms.trainer_id);
    terms.nutritionist_id = current.subscription.nutritionist_id.or(terms.nutritionist_id);

    let subscription = subscription::activate(db, user_id, terms).await?;
    info!("User {user_id} renewed subscription {}", subscription.id);

    Ok(SubscriptionStatus::at(subscription, Utc::now().into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(end_date: Option<DateTime<FixedOffset>>) -> Model {
        Model {
            id: Id::new_v4(),
            user_id: Id::new_v4(),
            plan: SubscriptionTier::Premium,
            is_active: true,
            start_date: Utc::now().into(),
            end_date,
            trainer_id: None,
            nutritionist_id: None,
        }
    }

    #[test]
    fn status_reports_expiry_relative_to_now() {
        let now: DateTime<FixedOffset> = Utc::now().into();

        assert!(SubscriptionStatus::at(subscription(Some(now - Duration::days(1))), now).is_expired);
        assert!(!SubscriptionStatus::at(subscription(Some(now + Duration::days(29))), now).is_expired);
    }

    #[test]
    fn pick_one_is_none_without_instructors() {
        assert_eq!(pick_one(&[]), None);
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn subscribe_requires_a_plan() {
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection();

        let err = subscribe(&db, Id::new_v4(), None, 30).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            crate::error::DomainErrorKind::Validation("Plan is required.".to_string())
        );
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn subscribe_ends_after_the_configured_days() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let now = Utc::now();
        let stored = Model {
            user_id,
            start_date: now.into(),
            ..subscription(Some((now + Duration::days(30)).into()))
        };

        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserModel>::new()])
            .append_query_results([Vec::<UserModel>::new()])
            .append_query_results([Vec::<Model>::new()])
            .append_query_results([[stored.clone()]])
            .into_connection();

        let status = subscribe(&db, user_id, Some(SubscriptionTier::Premium), 30).await?;

        assert!(!status.is_expired);
        assert_eq!(
            status.subscription.end_date,
            Some(status.subscription.start_date + Duration::days(30))
        );
        Ok(())
    }
}
