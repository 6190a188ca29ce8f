//! `SeaORM` Entity prelude

pub use super::challenge_participants::Entity as ChallengeParticipants;
pub use super::challenges::Entity as Challenges;
pub use super::chat_messages::Entity as ChatMessages;
pub use super::educational_contents::Entity as EducationalContents;
pub use super::exercises::Entity as Exercises;
pub use super::fitness_plan_exercises::Entity as FitnessPlanExercises;
pub use super::fitness_plan_users::Entity as FitnessPlanUsers;
pub use super::fitness_plans::Entity as FitnessPlans;
pub use super::foods::Entity as Foods;
pub use super::goals::Entity as Goals;
pub use super::meal_foods::Entity as MealFoods;
pub use super::meal_plan_users::Entity as MealPlanUsers;
pub use super::meal_plans::Entity as MealPlans;
pub use super::subscriptions::Entity as Subscriptions;
pub use super::users::Entity as Users;
