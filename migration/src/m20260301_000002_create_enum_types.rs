use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Postgres enum types backing the `DeriveActiveEnum` columns, as (type name, values).
const ENUM_TYPES: &[(&str, &[&str])] = &[
    ("role", &["user", "admin"]),
    ("specialization", &["trainer", "nutritionist"]),
    ("difficulty", &["beginner", "intermediate", "advance"]),
    ("challenge_muscle_group", &["chest", "core", "full-body"]),
    ("workout_type", &["strength", "cardio"]),
    (
        "muscle_group",
        &["fullbody", "chest", "back", "legs", "shoulders", "arms", "core"],
    ),
    ("equipment", &["none", "dumbells", "pull_up", "others"]),
    (
        "fitness_plan_type",
        &["weight_loss", "muscle_gain", "endurance", "maintain"],
    ),
    (
        "activity_level",
        &["sedentary", "light", "moderate", "active", "very_active"],
    ),
    (
        "week_day",
        &[
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
        ],
    ),
    (
        "food_type",
        &[
            "fruit",
            "vegetable",
            "grain",
            "protein",
            "dairy",
            "fat",
            "snack",
            "beverage",
            "other",
        ],
    ),
    (
        "meal_plan_type",
        &[
            "weight_loss",
            "muscle_gain",
            "maintenance",
            "diabetic",
            "keto",
            "vegetarian",
        ],
    ),
    (
        "meal_time",
        &[
            "breakfast",
            "morning_snack",
            "lunch",
            "afternoon_snack",
            "dinner",
            "evening_snack",
        ],
    ),
    ("content_type", &["video", "blog"]),
    ("content_category", &["workouts", "nutrition"]),
    ("goal_type", &["lose", "gain", "maintain"]),
    ("subscription_tier", &["premium"]),
];

fn create_type_sql(name: &str, values: &[&str]) -> String {
    let values = values
        .iter()
        .map(|value| format!("'{value}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TYPE fitlife.{name} AS ENUM ({values});")
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (name, values) in ENUM_TYPES {
            db.execute_unprepared(&create_type_sql(name, values)).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (name, _) in ENUM_TYPES.iter().rev() {
            db.execute_unprepared(&format!("DROP TYPE IF EXISTS fitlife.{name};"))
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_type_sql_quotes_every_value() {
        assert_eq!(
            create_type_sql("workout_type", &["strength", "cardio"]),
            "CREATE TYPE fitlife.workout_type AS ENUM ('strength', 'cardio');"
        );
    }
}
