use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Tables in dependency order; `down` drops them in reverse.
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE fitlife.users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email VARCHAR(254) NOT NULL,
            username VARCHAR(150) NOT NULL,
            first_name VARCHAR(150) NOT NULL DEFAULT '',
            last_name VARCHAR(150) NOT NULL DEFAULT '',
            password VARCHAR NOT NULL,
            age INTEGER,
            height DOUBLE PRECISION,
            weight DOUBLE PRECISION,
            birthday DATE,
            profile_picture_url VARCHAR,
            role fitlife.role NOT NULL DEFAULT 'user',
            is_instructor BOOLEAN NOT NULL DEFAULT FALSE,
            contact VARCHAR(10),
            experience VARCHAR,
            bio TEXT,
            specialization fitlife.specialization,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CONSTRAINT users_email_key UNIQUE (email),
            CONSTRAINT users_username_key UNIQUE (username),
            CONSTRAINT users_contact_key UNIQUE (contact)
        );
    "#,
    ),
    (
        "challenges",
        r#"
        CREATE TABLE fitlife.challenges (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(200) NOT NULL,
            description TEXT NOT NULL,
            duration VARCHAR(50) NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            difficulty fitlife.difficulty NOT NULL DEFAULT 'intermediate',
            muscle_group fitlife.challenge_muscle_group NOT NULL DEFAULT 'full-body',
            workout_type fitlife.workout_type NOT NULL DEFAULT 'strength',
            image_url VARCHAR,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
    "#,
    ),
    (
        "challenge_participants",
        r#"
        CREATE TABLE fitlife.challenge_participants (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            challenge_id UUID NOT NULL REFERENCES fitlife.challenges (id) ON DELETE CASCADE,
            date_joined DATE NOT NULL DEFAULT CURRENT_DATE,
            progress JSONB NOT NULL DEFAULT '[]'::jsonb,
            CONSTRAINT challenge_participants_user_challenge_key UNIQUE (user_id, challenge_id)
        );
    "#,
    ),
    (
        "exercises",
        r#"
        CREATE TABLE fitlife.exercises (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(40) NOT NULL,
            description TEXT,
            image_url VARCHAR,
            calories_burned DOUBLE PRECISION,
            muscle_group fitlife.muscle_group NOT NULL DEFAULT 'fullbody',
            difficulty fitlife.difficulty NOT NULL DEFAULT 'intermediate',
            equipment fitlife.equipment NOT NULL DEFAULT 'none',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CONSTRAINT exercises_name_key UNIQUE (name)
        );
    "#,
    ),
    (
        "fitness_plans",
        r#"
        CREATE TABLE fitlife.fitness_plans (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(200) NOT NULL,
            description TEXT,
            plan_type fitlife.fitness_plan_type NOT NULL DEFAULT 'maintain',
            duration_weeks INTEGER NOT NULL DEFAULT 4 CHECK (duration_weeks >= 1),
            difficulty fitlife.activity_level NOT NULL DEFAULT 'moderate',
            picture_url VARCHAR,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
    "#,
    ),
    (
        "fitness_plan_exercises",
        r#"
        CREATE TABLE fitlife.fitness_plan_exercises (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            fitness_plan_id UUID NOT NULL REFERENCES fitlife.fitness_plans (id) ON DELETE CASCADE,
            exercise_id UUID NOT NULL REFERENCES fitlife.exercises (id) ON DELETE CASCADE,
            day fitlife.week_day NOT NULL DEFAULT 'monday',
            sets INTEGER NOT NULL DEFAULT 3,
            reps INTEGER NOT NULL DEFAULT 10,
            duration_minutes INTEGER,
            "order" INTEGER NOT NULL DEFAULT 0,
            CONSTRAINT fitness_plan_exercises_plan_exercise_day_key UNIQUE (fitness_plan_id, exercise_id, day)
        );
    "#,
    ),
    (
        "fitness_plan_users",
        r#"
        CREATE TABLE fitlife.fitness_plan_users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            fitness_plan_id UUID NOT NULL REFERENCES fitlife.fitness_plans (id) ON DELETE CASCADE,
            progress JSONB NOT NULL DEFAULT '[]'::jsonb,
            joined_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CONSTRAINT fitness_plan_users_user_plan_key UNIQUE (user_id, fitness_plan_id)
        );
    "#,
    ),
    (
        "foods",
        r#"
        CREATE TABLE fitlife.foods (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(40) NOT NULL,
            description TEXT,
            image_url VARCHAR,
            carbs DOUBLE PRECISION,
            protein DOUBLE PRECISION NOT NULL DEFAULT 0,
            fat DOUBLE PRECISION NOT NULL DEFAULT 0,
            food_type fitlife.food_type NOT NULL DEFAULT 'other',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CONSTRAINT foods_name_key UNIQUE (name)
        );
    "#,
    ),
    (
        "meal_plans",
        r#"
        CREATE TABLE fitlife.meal_plans (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(200) NOT NULL,
            description TEXT,
            plan_type fitlife.meal_plan_type NOT NULL DEFAULT 'maintenance',
            daily_calorie_target INTEGER,
            duration_weeks INTEGER NOT NULL DEFAULT 4 CHECK (duration_weeks >= 1),
            image_url VARCHAR,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        );
    "#,
    ),
    (
        "meal_foods",
        r#"
        CREATE TABLE fitlife.meal_foods (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            meal_plan_id UUID NOT NULL REFERENCES fitlife.meal_plans (id) ON DELETE CASCADE,
            food_id UUID NOT NULL REFERENCES fitlife.foods (id) ON DELETE CASCADE,
            meal_time fitlife.meal_time NOT NULL DEFAULT 'breakfast',
            quantity_grams DOUBLE PRECISION NOT NULL DEFAULT 100 CHECK (quantity_grams >= 1),
            day INTEGER NOT NULL DEFAULT 1 CHECK (day >= 1),
            "order" INTEGER NOT NULL DEFAULT 0,
            CONSTRAINT meal_foods_plan_food_day_meal_time_key UNIQUE (meal_plan_id, food_id, day, meal_time)
        );
    "#,
    ),
    (
        "meal_plan_users",
        r#"
        CREATE TABLE fitlife.meal_plan_users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            meal_plan_id UUID NOT NULL REFERENCES fitlife.meal_plans (id) ON DELETE CASCADE,
            progress JSONB NOT NULL DEFAULT '[]'::jsonb,
            joined_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            CONSTRAINT meal_plan_users_user_plan_key UNIQUE (user_id, meal_plan_id)
        );
    "#,
    ),
    (
        "educational_contents",
        r#"
        CREATE TABLE fitlife.educational_contents (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(200) NOT NULL,
            description TEXT NOT NULL,
            content_type fitlife.content_type NOT NULL,
            category fitlife.content_category NOT NULL,
            upload_date TIMESTAMPTZ NOT NULL DEFAULT now(),
            thumbnail_url VARCHAR,
            video_url VARCHAR,
            blog_content TEXT,
            views INTEGER NOT NULL DEFAULT 0,
            rating DOUBLE PRECISION NOT NULL DEFAULT 0,
            rating_count INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "goals",
        r#"
        CREATE TABLE fitlife.goals (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            goal_type fitlife.goal_type NOT NULL DEFAULT 'maintain',
            start_date DATE NOT NULL,
            target_date DATE NOT NULL,
            target_weight DOUBLE PRECISION NOT NULL,
            activity_level fitlife.activity_level NOT NULL DEFAULT 'moderate',
            CONSTRAINT goals_user_id_key UNIQUE (user_id)
        );
    "#,
    ),
    (
        "subscriptions",
        r#"
        CREATE TABLE fitlife.subscriptions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            plan fitlife.subscription_tier NOT NULL DEFAULT 'premium',
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            start_date TIMESTAMPTZ NOT NULL DEFAULT now(),
            end_date TIMESTAMPTZ,
            trainer_id UUID REFERENCES fitlife.users (id) ON DELETE SET NULL,
            nutritionist_id UUID REFERENCES fitlife.users (id) ON DELETE SET NULL,
            CONSTRAINT subscriptions_user_id_key UNIQUE (user_id)
        );
    "#,
    ),
    (
        "chat_messages",
        r#"
        CREATE TABLE fitlife.chat_messages (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            sender_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            recipient_id UUID NOT NULL REFERENCES fitlife.users (id) ON DELETE CASCADE,
            message TEXT NOT NULL,
            timestamp TIMESTAMPTZ NOT NULL DEFAULT now(),
            is_read BOOLEAN NOT NULL DEFAULT FALSE
        );
    "#,
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (_, create_sql) in TABLES {
            db.execute_unprepared(create_sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (table, _) in TABLES.iter().rev() {
            db.execute_unprepared(&format!("DROP TABLE IF EXISTS fitlife.{table};"))
                .await?;
        }
        Ok(())
    }
}
