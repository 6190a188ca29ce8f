use uuid::Uuid;

pub mod prelude;

// Core entities
pub mod challenge_participants;
pub mod challenges;
pub mod chat_messages;
pub mod educational_contents;
pub mod exercises;
pub mod fitness_plan_exercises;
pub mod fitness_plan_users;
pub mod fitness_plans;
pub mod foods;
pub mod goals;
pub mod meal_foods;
pub mod meal_plan_users;
pub mod meal_plans;
pub mod subscriptions;
pub mod users;

// Active enums and column value types
pub mod activity_level;
pub mod challenge_muscle_group;
pub mod content_category;
pub mod content_type;
pub mod difficulty;
pub mod equipment;
pub mod fitness_plan_type;
pub mod food_type;
pub mod goal_type;
pub mod meal_plan_type;
pub mod meal_time;
pub mod muscle_group;
pub mod progress;
pub mod roles;
pub mod specialization;
pub mod subscription_tier;
pub mod week_day;
pub mod workout_type;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
