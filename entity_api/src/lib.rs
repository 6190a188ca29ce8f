use chrono::{Days, Utc};
use password_auth::generate_hash;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub use entity::{
    activity_level, challenge_muscle_group, challenge_participants, challenges, chat_messages,
    content_category, content_type, difficulty, educational_contents, equipment, exercises,
    fitness_plan_exercises, fitness_plan_type, fitness_plan_users, fitness_plans, food_type, foods,
    goal_type, goals, meal_foods, meal_plan_type, meal_plan_users, meal_plans, meal_time,
    muscle_group, progress, roles, specialization, subscription_tier, subscriptions, users,
    week_day, workout_type, Id,
};

pub use mutate::{IntoUpdateMap, UpdateMap};
pub use query::{IntoQueryFilterMap, QueryFilterMap};

pub mod challenge;
pub mod challenge_participant;
pub mod chat_message;
pub mod educational_content;
pub mod error;
pub mod exercise;
pub mod fitness_plan;
pub mod fitness_plan_exercise;
pub mod fitness_plan_user;
pub mod food;
pub mod goal;
pub mod meal_food;
pub mod meal_plan;
pub mod meal_plan_user;
pub mod mutate;
pub mod query;
pub mod subscription;
pub mod user;

pub fn uuid_parse_str(uuid_str: &str) -> Result<Id, error::Error> {
    Id::parse_str(uuid_str).map_err(|_| error::Error {
        source: None,
        error_kind: error::EntityApiErrorKind::InvalidQueryTerm,
    })
}

pub fn naive_date_parse_str(date_str: &str) -> Result<chrono::NaiveDate, error::Error> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| error::Error {
        source: None,
        error_kind: error::EntityApiErrorKind::InvalidQueryTerm,
    })
}

/// Populates an empty database with an admin, two instructors, a member and a small
/// catalogue of challenges, exercises, foods, plans and articles.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), error::Error> {
    let now = Utc::now();
    let today = now.date_naive();

    let seed_user = |email: &str,
                     username: &str,
                     first_name: &str,
                     last_name: &str,
                     password: &str| users::ActiveModel {
        email: Set(email.to_owned()),
        username: Set(username.to_owned()),
        first_name: Set(first_name.to_owned()),
        last_name: Set(last_name.to_owned()),
        password: Set(generate_hash(password)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    users::ActiveModel {
        role: Set(roles::Role::Admin),
        ..seed_user("admin@fitlife.app", "admin", "Admin", "User", "Adm1n!pass")
    }
    .insert(db)
    .await?;

    users::ActiveModel {
        is_instructor: Set(true),
        specialization: Set(Some(specialization::Specialization::Trainer)),
        contact: Set(Some("5550100".to_owned())),
        experience: Set(Some("8 years of strength coaching".to_owned())),
        bio: Set(Some("Certified personal trainer.".to_owned())),
        ..seed_user("trainer@fitlife.app", "coach_sam", "Sam", "Rivera", "password123")
    }
    .insert(db)
    .await?;

    users::ActiveModel {
        is_instructor: Set(true),
        specialization: Set(Some(specialization::Specialization::Nutritionist)),
        contact: Set(Some("5550101".to_owned())),
        experience: Set(Some("Registered dietitian".to_owned())),
        bio: Set(Some("Plant forward meal planning.".to_owned())),
        ..seed_user("nutrition@fitlife.app", "nutri_lee", "Lee", "Park", "password123")
    }
    .insert(db)
    .await?;

    users::ActiveModel {
        age: Set(Some(29)),
        height: Set(Some(172.0)),
        weight: Set(Some(70.5)),
        ..seed_user("member@fitlife.app", "member", "Alex", "Morgan", "password123")
    }
    .insert(db)
    .await?;

    challenges::ActiveModel {
        title: Set("30 Day Core Crusher".to_owned()),
        description: Set("Daily core work for a month.".to_owned()),
        duration: Set("30 days".to_owned()),
        start_date: Set(today),
        end_date: Set(today.checked_add_days(Days::new(29)).unwrap_or(today)),
        difficulty: Set(difficulty::Difficulty::Beginner),
        muscle_group: Set(challenge_muscle_group::ChallengeMuscleGroup::Core),
        workout_type: Set(workout_type::WorkoutType::Strength),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let push_up = exercises::ActiveModel {
        name: Set("Push Up".to_owned()),
        description: Set(Some("Bodyweight chest press.".to_owned())),
        calories_burned: Set(Some(7.0)),
        muscle_group: Set(muscle_group::MuscleGroup::Chest),
        difficulty: Set(difficulty::Difficulty::Beginner),
        equipment: Set(equipment::Equipment::NoEquipment),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let squat = exercises::ActiveModel {
        name: Set("Bodyweight Squat".to_owned()),
        calories_burned: Set(Some(8.0)),
        muscle_group: Set(muscle_group::MuscleGroup::Legs),
        difficulty: Set(difficulty::Difficulty::Beginner),
        equipment: Set(equipment::Equipment::NoEquipment),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let plan = fitness_plans::ActiveModel {
        name: Set("Starter Strength".to_owned()),
        description: Set(Some("Full body basics three days a week.".to_owned())),
        plan_type: Set(fitness_plan_type::FitnessPlanType::MuscleGain),
        duration_weeks: Set(4),
        difficulty: Set(activity_level::ActivityLevel::Light),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (order, (exercise, day)) in [
        (&push_up, week_day::WeekDay::Monday),
        (&squat, week_day::WeekDay::Monday),
        (&push_up, week_day::WeekDay::Wednesday),
        (&squat, week_day::WeekDay::Friday),
    ]
    .into_iter()
    .enumerate()
    {
        fitness_plan_exercises::ActiveModel {
            fitness_plan_id: Set(plan.id),
            exercise_id: Set(exercise.id),
            day: Set(day),
            sets: Set(3),
            reps: Set(12),
            order: Set(order as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    let oats = foods::ActiveModel {
        name: Set("Rolled Oats".to_owned()),
        carbs: Set(Some(66.0)),
        protein: Set(17.0),
        fat: Set(7.0),
        food_type: Set(food_type::FoodType::Grain),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let chicken = foods::ActiveModel {
        name: Set("Chicken Breast".to_owned()),
        carbs: Set(None),
        protein: Set(31.0),
        fat: Set(3.6),
        food_type: Set(food_type::FoodType::Protein),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let meal_plan = meal_plans::ActiveModel {
        name: Set("Lean Week".to_owned()),
        plan_type: Set(meal_plan_type::MealPlanType::WeightLoss),
        daily_calorie_target: Set(Some(1800)),
        duration_weeks: Set(1),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (food, meal_time, grams) in [
        (&oats, meal_time::MealTime::Breakfast, 80.0),
        (&chicken, meal_time::MealTime::Lunch, 150.0),
    ] {
        meal_foods::ActiveModel {
            meal_plan_id: Set(meal_plan.id),
            food_id: Set(food.id),
            meal_time: Set(meal_time),
            quantity_grams: Set(grams),
            day: Set(1),
            order: Set(0),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    educational_contents::ActiveModel {
        title: Set("Protein basics".to_owned()),
        description: Set("How much protein you need and where to get it.".to_owned()),
        content_type: Set(content_type::ContentType::Blog),
        category: Set(content_category::ContentCategory::Nutrition),
        upload_date: Set(now.into()),
        blog_content: Set(Some("Aim for 1.6 g per kg of body weight.".to_owned())),
        views: Set(0),
        rating: Set(0.0),
        rating_count: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_parse_str_parses_valid_uuid() {
        let uuid_str = "a98c3295-0933-44cb-89db-7db0f7250fb1";
        let uuid = uuid_parse_str(uuid_str).unwrap();
        assert_eq!(uuid.to_string(), uuid_str);
    }

    #[test]
    fn uuid_parse_str_returns_error_for_invalid_uuid() {
        assert_eq!(
            uuid_parse_str("invalid").unwrap_err().error_kind,
            error::EntityApiErrorKind::InvalidQueryTerm
        );
    }

    #[test]
    fn naive_date_parse_str_parses_valid_date() {
        let date = naive_date_parse_str("2024-06-01").unwrap();
        assert_eq!(date.to_string(), "2024-06-01");
    }

    #[test]
    fn naive_date_parse_str_returns_error_for_invalid_date() {
        assert!(naive_date_parse_str("June first").is_err());
    }
}
