use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// (index name, table, column) for the columns list endpoints sort or filter on.
const INDEXES: &[(&str, &str, &str)] = &[
    ("challenges_created_at", "challenges", "created_at"),
    ("challenges_end_date", "challenges", "end_date"),
    ("challenge_participants_user_id", "challenge_participants", "user_id"),
    ("exercises_muscle_group", "exercises", "muscle_group"),
    ("fitness_plan_users_user_id", "fitness_plan_users", "user_id"),
    ("foods_food_type", "foods", "food_type"),
    ("meal_plans_plan_type", "meal_plans", "plan_type"),
    ("meal_plan_users_user_id", "meal_plan_users", "user_id"),
    ("educational_contents_upload_date", "educational_contents", "upload_date"),
    ("chat_messages_sender_id", "chat_messages", "sender_id"),
    ("chat_messages_recipient_id", "chat_messages", "recipient_id"),
    ("chat_messages_timestamp", "chat_messages", "timestamp"),
    ("users_created_at", "users", "created_at"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table((Alias::new("fitlife"), Alias::new(*table)))
                        .col(Alias::new(*column))
                        .to_owned(),
                )
                .await?;
        }

        // Plan days are always read in display order
        manager
            .create_index(
                Index::create()
                    .name("fitness_plan_exercises_plan_day_order")
                    .table((Alias::new("fitlife"), Alias::new("fitness_plan_exercises")))
                    .col(Alias::new("fitness_plan_id"))
                    .col(Alias::new("day"))
                    .col(Alias::new("order"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("meal_foods_plan_day_order")
                    .table((Alias::new("fitlife"), Alias::new("meal_foods")))
                    .col(Alias::new("meal_plan_id"))
                    .col(Alias::new("day"))
                    .col(Alias::new("order"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("meal_foods_plan_day_order", "meal_foods"),
            ("fitness_plan_exercises_plan_day_order", "fitness_plan_exercises"),
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table((Alias::new("fitlife"), Alias::new(table)))
                        .to_owned(),
                )
                .await?;
        }

        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(*name)
                        .table((Alias::new("fitlife"), Alias::new(*table)))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
