use crate::activity_level::ActivityLevel;
use crate::error::Error;
use crate::goal_type::GoalType;
use crate::goals::Model;
use crate::users::Model as UserModel;
use crate::Id;
use chrono::NaiveDate;
use entity_api::{goal, user};
use log::*;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;

/// A goal as submitted by its owner, along with the body metrics that go on their
/// profile.
#[derive(Debug, Clone)]
pub struct GoalInput {
    pub goal_type: GoalType,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub target_weight: f64,
    pub activity_level: ActivityLevel,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub current_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalSummary {
    #[serde(flatten)]
    pub goal: Model,
    /// Estimated daily calories, once age, height and weight are known
    pub daily_calories: Option<u32>,
}

impl GoalSummary {
    fn new(goal: Model, user: &UserModel) -> Self {
        let daily_calories = match (user.age, user.height, user.weight) {
            (Some(age), Some(height), Some(weight)) => Some(daily_calorie_estimate(
                age,
                height,
                weight,
                &goal.activity_level,
                &goal.goal_type,
            )),
            _ => None,
        };
        Self {
            goal,
            daily_calories,
        }
    }
}

fn activity_factor(activity_level: &ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Mifflin-St Jeor BMR with the midpoint of the sex constants, scaled by activity
/// and shifted 500 kcal for weight loss or gain. `height` is in cm, `weight` in kg.
pub fn daily_calorie_estimate(
    age: i32,
    height: f64,
    weight: f64,
    activity_level: &ActivityLevel,
    goal_type: &GoalType,
) -> u32 {
    let bmr = 10.0 * weight + 6.25 * height - 5.0 * age as f64 - 78.0;
    let maintenance = bmr * activity_factor(activity_level);
    let adjusted = match goal_type {
        GoalType::Lose => maintenance - 500.0,
        GoalType::Gain => maintenance + 500.0,
        GoalType::Maintain => maintenance,
    };
    adjusted.round().max(0.0) as u32
}

fn validate(input: &GoalInput) -> Result<(), Error> {
    if input.target_date < input.start_date {
        return Err(Error::validation(
            "Target date must be on or after the start date.",
        ));
    }
    if input.target_weight <= 0.0 {
        return Err(Error::validation("Target weight must be positive."));
    }
    if input.age.is_some_and(|age| age <= 0)
        || input.height.is_some_and(|height| height <= 0.0)
        || input.current_weight.is_some_and(|weight| weight <= 0.0)
    {
        return Err(Error::validation(
            "Age, height and current weight must be positive.",
        ));
    }
    Ok(())
}

/// `user_id`'s goal, if they have set one.
pub async fn find_mine(db: &DatabaseConnection, user_id: Id) -> Result<Vec<GoalSummary>, Error> {
    let user = user::find_by_id(db, user_id).await?;
    Ok(goal::find_by_user(db, user_id)
        .await?
        .map(|goal| GoalSummary::new(goal, &user))
        .into_iter()
        .collect())
}

/// Creates or replaces `user_id`'s goal and stores the submitted body metrics on
/// their profile.
pub async fn save(
    db: &DatabaseConnection,
    user_id: Id,
    input: GoalInput,
) -> Result<(GoalSummary, bool), Error> {
    validate(&input)?;

    let txn = db.begin().await.map_err(entity_api::error::Error::from)?;

    let existed = goal::find_by_user(&txn, user_id).await?.is_some();
    let user = user::find_by_id(&txn, user_id).await?;
    let user =
        user::update_body_metrics(&txn, user, input.age, input.height, input.current_weight)
            .await?;

    let goal_model = Model {
        id: Id::nil(),
        user_id,
        goal_type: input.goal_type,
        start_date: input.start_date,
        target_date: input.target_date,
        target_weight: input.target_weight,
        activity_level: input.activity_level,
    };
    let goal = goal::upsert(&txn, user_id, goal_model).await?;

    txn.commit().await.map_err(entity_api::error::Error::from)?;

    if existed {
        info!("Updated goal for user {user_id}");
    } else {
        info!("Created goal for user {user_id}");
    }

    Ok((GoalSummary::new(goal, &user), existed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_for_a_moderately_active_adult() {
        // BMR = 700 + 1100 - 150 - 78 = 1572, * 1.55 = 2436.6
        assert_eq!(
            daily_calorie_estimate(30, 176.0, 70.0, &ActivityLevel::Moderate, &GoalType::Maintain),
            2437
        );
    }

    #[test]
    fn estimate_shifts_for_weight_loss_and_gain() {
        let maintain =
            daily_calorie_estimate(30, 176.0, 70.0, &ActivityLevel::Sedentary, &GoalType::Maintain);
        let lose =
            daily_calorie_estimate(30, 176.0, 70.0, &ActivityLevel::Sedentary, &GoalType::Lose);
        let gain =
            daily_calorie_estimate(30, 176.0, 70.0, &ActivityLevel::Sedentary, &GoalType::Gain);

        assert_eq!(maintain - lose, 500);
        assert_eq!(gain - maintain, 500);
    }

    #[test]
    fn validate_rejects_a_target_before_the_start() {
        let input = GoalInput {
            goal_type: GoalType::Lose,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            target_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            target_weight: 65.0,
            activity_level: ActivityLevel::Light,
            age: None,
            height: None,
            current_weight: None,
        };

        assert!(validate(&input).is_err());
    }
}
