//! This module re-exports various items from the `entity_api` crate.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate. By re-exporting these items, we provide a clear and
//! consistent interface for working with query filters within the domain layer, while encapsulating
//! the underlying implementation details remain in the `entity_api` crate.
pub use entity_api::{
    mutate::{IntoUpdateMap, UpdateMap},
    IntoQueryFilterMap, QueryFilterMap,
};

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{
    activity_level, challenge_muscle_group, challenge_participants, challenges, chat_messages,
    content_category, content_type, difficulty, educational_contents, equipment, exercises,
    fitness_plan_exercises, fitness_plan_type, fitness_plan_users, fitness_plans, food_type, foods,
    goal_type, goals, meal_foods, meal_plan_type, meal_plan_users, meal_plans, meal_time,
    muscle_group, roles, specialization, subscription_tier,
    subscriptions, users, week_day, workout_type, Id,
};

pub use entity_api::{naive_date_parse_str, seed_database, uuid_parse_str};

pub mod challenge;
pub mod chat;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod exercise;
pub mod fitness_plan;
pub mod food;
pub mod goal;
pub mod instructor;
pub mod meal_plan;
pub mod progress;
pub mod subscription;
pub mod user;
