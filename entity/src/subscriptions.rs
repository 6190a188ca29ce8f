//! `SeaORM` Entity for the subscriptions table.
//!
//! A user holds at most one subscription. Premium subscriptions carry the trainer
//! and nutritionist assigned to the subscriber.

use crate::subscription_tier::SubscriptionTier;
use crate::Id;
use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::subscriptions::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "subscriptions")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    #[sea_orm(unique)]
    pub user_id: Id,
    pub plan: SubscriptionTier,
    #[serde(skip_deserializing)]
    pub is_active: bool,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub start_date: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub end_date: Option<DateTimeWithTimeZone>,
    #[serde(skip_deserializing)]
    pub trainer_id: Option<Id>,
    #[serde(skip_deserializing)]
    pub nutritionist_id: Option<Id>,
}

impl Model {
    /// A subscription without an end date never expires.
    pub fn is_expired_at(&self, now: DateTime<FixedOffset>) -> bool {
        self.end_date.is_some_and(|end| now > end)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TrainerId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Trainers,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::NutritionistId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Nutritionists,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn subscription(end_date: Option<DateTimeWithTimeZone>) -> Model {
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
    fn is_expired_at_is_false_before_the_end_date() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let sub = subscription(Some(now + Duration::days(30)));
        assert!(!sub.is_expired_at(now));
    }

    #[test]
    fn is_expired_at_is_true_once_the_end_date_has_passed() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let sub = subscription(Some(now - Duration::seconds(1)));
        assert!(sub.is_expired_at(now));
    }

    #[test]
    fn is_expired_at_is_false_without_an_end_date() {
        assert!(!subscription(None).is_expired_at(Utc::now().into()));
    }
}
