use crate::{middleware::auth::require_auth, params, protect, response, AppState};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, patch, post, put},
    Router,
};

use crate::controller::{
    challenge_controller, challenge_participant_controller, chat_controller, content_controller,
    dashboard_controller, exercise_controller, fitness_plan_controller,
    fitness_plan_exercise_controller, fitness_plan_user_controller, food_controller,
    goal_controller, health_check_controller, instructor_controller, meal_food_controller,
    meal_plan_controller, meal_plan_user_controller, subscription_controller, user_controller,
    user_session_controller,
};

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "FitLife API"
        ),
        paths(
            challenge_controller::index,
            challenge_controller::read,
            challenge_controller::create,
            challenge_controller::update,
            challenge_controller::delete,
            challenge_participant_controller::index,
            challenge_participant_controller::create,
            challenge_participant_controller::read,
            challenge_participant_controller::delete,
            challenge_participant_controller::tick_day,
            chat_controller::index,
            chat_controller::create,
            chat_controller::mark_read,
            chat_controller::conversations,
            chat_controller::thread,
            chat_controller::reply,
            content_controller::index,
            content_controller::read,
            content_controller::create,
            content_controller::update,
            content_controller::delete,
            content_controller::increment_views,
            content_controller::rate,
            dashboard_controller::index,
            exercise_controller::index,
            exercise_controller::read,
            exercise_controller::create,
            exercise_controller::update,
            exercise_controller::delete,
            fitness_plan_controller::index,
            fitness_plan_controller::read,
            fitness_plan_controller::create,
            fitness_plan_controller::update,
            fitness_plan_controller::delete,
            fitness_plan_exercise_controller::index,
            fitness_plan_exercise_controller::create,
            fitness_plan_exercise_controller::update,
            fitness_plan_exercise_controller::delete,
            fitness_plan_user_controller::index,
            fitness_plan_user_controller::create,
            fitness_plan_user_controller::read,
            fitness_plan_user_controller::delete,
            fitness_plan_user_controller::tick_day,
            food_controller::index,
            food_controller::read,
            food_controller::create,
            food_controller::update,
            food_controller::delete,
            goal_controller::index,
            goal_controller::create,
            health_check_controller::health_check,
            instructor_controller::index,
            instructor_controller::read,
            instructor_controller::create,
            instructor_controller::update,
            instructor_controller::delete,
            instructor_controller::dashboard,
            instructor_controller::client_details,
            meal_food_controller::index,
            meal_food_controller::create,
            meal_food_controller::update,
            meal_food_controller::delete,
            meal_plan_controller::index,
            meal_plan_controller::read,
            meal_plan_controller::daily_summary,
            meal_plan_controller::create,
            meal_plan_controller::update,
            meal_plan_controller::delete,
            meal_plan_user_controller::index,
            meal_plan_user_controller::create,
            meal_plan_user_controller::read,
            meal_plan_user_controller::delete,
            meal_plan_user_controller::tick_day,
            subscription_controller::index,
            subscription_controller::create,
            subscription_controller::read,
            subscription_controller::renew,
            user_controller::register,
            user_controller::index,
            user_controller::delete,
            user_controller::profile,
            user_controller::update_profile,
            user_controller::change_password,
            user_controller::assigned_instructors,
            user_session_controller::login,
            user_session_controller::logout,
        ),
        components(
            schemas(
                domain::challenges::Model,
                domain::challenge_participants::Model,
                domain::chat_messages::Model,
                domain::educational_contents::Model,
                domain::exercises::Model,
                domain::fitness_plans::Model,
                domain::fitness_plan_exercises::Model,
                domain::fitness_plan_users::Model,
                domain::foods::Model,
                domain::goals::Model,
                domain::meal_foods::Model,
                domain::meal_plans::Model,
                domain::meal_plan_users::Model,
                domain::subscriptions::Model,
                domain::users::Model,
                domain::user::Credentials,
                params::TickDayParams,
                params::challenge::JoinParams,
                params::challenge::UpdateParams,
                params::chat::ReplyParams,
                params::chat::SendParams,
                params::content::RateParams,
                params::content::UpdateParams,
                params::exercise::UpdateParams,
                params::fitness_plan::CreateParams,
                params::fitness_plan::JoinParams,
                params::fitness_plan::NestedExercise,
                params::fitness_plan::UpdateExerciseParams,
                params::fitness_plan::UpdateParams,
                params::food::UpdateParams,
                params::goal::GoalParams,
                params::meal_plan::JoinParams,
                params::meal_plan::UpdateMealFoodParams,
                params::meal_plan::UpdateParams,
                params::subscription::SubscribeParams,
                params::user::PasswordParams,
                params::user::RegisterParams,
                params::user::UpdateUserParams,
                response::exercise::ExerciseResponse,
                response::food::FoodResponse,
                response::plan::FitnessPlanResponse,
                response::plan::MealPlanResponse,
                response::session::RegisteredUser,
                response::session::SessionUser,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "fitlife", description = "FitLife fitness and nutrition API")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Defines our cookie session based authentication requirement for gaining access to our
// API endpoints for OpenAPI.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "id",
                    "Session id value returned from successful login via Set-Cookie header",
                ))),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(challenge_routes(app_state.clone()))
        .merge(challenge_participant_routes(app_state.clone()))
        .merge(chat_routes(app_state.clone()))
        .merge(content_routes(app_state.clone()))
        .merge(dashboard_routes(app_state.clone()))
        .merge(exercise_routes(app_state.clone()))
        .merge(fitness_plan_routes(app_state.clone()))
        .merge(fitness_plan_exercise_routes(app_state.clone()))
        .merge(fitness_plan_user_routes(app_state.clone()))
        .merge(food_routes(app_state.clone()))
        .merge(goal_routes(app_state.clone()))
        .merge(health_routes())
        .merge(instructor_routes(app_state.clone()))
        .merge(meal_food_routes(app_state.clone()))
        .merge(meal_plan_routes(app_state.clone()))
        .merge(meal_plan_user_routes(app_state.clone()))
        .merge(subscription_routes(app_state.clone()))
        .merge(user_routes(app_state.clone()))
        .merge(user_session_routes(app_state.clone()))
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
}

/// Routes only admins reach. Authentication runs before the admin check.
fn admin_only(routes: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    routes
        .route_layer(from_fn_with_state(app_state.clone(), protect::admin))
        .route_layer(from_fn(require_auth))
}

fn challenge_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/challenges", get(challenge_controller::index))
        .route("/api/challenges/:id", get(challenge_controller::read))
        .merge(admin_only(
            Router::new()
                .route("/api/challenges", post(challenge_controller::create))
                .route(
                    "/api/challenges/:id",
                    put(challenge_controller::update).delete(challenge_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn challenge_participant_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/challenge-participants",
            get(challenge_participant_controller::index)
                .post(challenge_participant_controller::create),
        )
        .route(
            "/api/challenge-participants/:id",
            get(challenge_participant_controller::read)
                .delete(challenge_participant_controller::delete),
        )
        .route(
            "/api/challenge-participants/:id/progress",
            post(challenge_participant_controller::tick_day),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn chat_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/chat/messages",
            get(chat_controller::index).post(chat_controller::create),
        )
        .route(
            "/api/chat/messages/:id/read",
            patch(chat_controller::mark_read),
        )
        .route(
            "/api/chat/conversations",
            get(chat_controller::conversations),
        )
        .route(
            "/api/chat/:user_id",
            get(chat_controller::thread).post(chat_controller::reply),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn content_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/education", get(content_controller::index))
        .route("/education/:id", get(content_controller::read))
        .route(
            "/education/:id/views",
            post(content_controller::increment_views),
        )
        .merge(
            Router::new()
                .route("/education", post(content_controller::create))
                .route("/education/:id/rate", post(content_controller::rate))
                .route_layer(from_fn(require_auth)),
        )
        .merge(admin_only(
            Router::new().route(
                "/education/:id",
                put(content_controller::update).delete(content_controller::delete),
            ),
            &app_state,
        ))
        .with_state(app_state)
}

fn dashboard_routes(app_state: AppState) -> Router {
    admin_only(
        Router::new().route("/api/dashboard", get(dashboard_controller::index)),
        &app_state,
    )
    .with_state(app_state)
}

fn exercise_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/exercises", get(exercise_controller::index))
        .route("/api/exercises/:id", get(exercise_controller::read))
        .merge(admin_only(
            Router::new()
                .route("/api/exercises", post(exercise_controller::create))
                .route(
                    "/api/exercises/:id",
                    put(exercise_controller::update).delete(exercise_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn fitness_plan_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/fitness-plans", get(fitness_plan_controller::index))
        .route("/api/fitness-plans/:id", get(fitness_plan_controller::read))
        .merge(admin_only(
            Router::new()
                .route("/api/fitness-plans", post(fitness_plan_controller::create))
                .route(
                    "/api/fitness-plans/:id",
                    put(fitness_plan_controller::update).delete(fitness_plan_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn fitness_plan_exercise_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/fitness-plan-exercises",
            get(fitness_plan_exercise_controller::index),
        )
        .merge(admin_only(
            Router::new()
                .route(
                    "/api/fitness-plan-exercises",
                    post(fitness_plan_exercise_controller::create),
                )
                .route(
                    "/api/fitness-plan-exercises/:id",
                    put(fitness_plan_exercise_controller::update)
                        .delete(fitness_plan_exercise_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn fitness_plan_user_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/fitness-plan-users",
            get(fitness_plan_user_controller::index).post(fitness_plan_user_controller::create),
        )
        .route(
            "/api/fitness-plan-users/:id",
            get(fitness_plan_user_controller::read).delete(fitness_plan_user_controller::delete),
        )
        .route(
            "/api/fitness-plan-users/:id/progress",
            post(fitness_plan_user_controller::tick_day),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn food_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/foods", get(food_controller::index))
        .route("/api/foods/:id", get(food_controller::read))
        .merge(admin_only(
            Router::new()
                .route("/api/foods", post(food_controller::create))
                .route(
                    "/api/foods/:id",
                    put(food_controller::update).delete(food_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn goal_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/goals",
            get(goal_controller::index).post(goal_controller::create),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn instructor_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/instructors", get(instructor_controller::index))
        .route("/instructors/:id", get(instructor_controller::read))
        .merge(admin_only(
            Router::new()
                .route("/instructors", post(instructor_controller::create))
                .route(
                    "/instructors/:id",
                    put(instructor_controller::update).delete(instructor_controller::delete),
                ),
            &app_state,
        ))
        .merge(
            Router::new()
                .route(
                    "/api/instructor/dashboard",
                    get(instructor_controller::dashboard),
                )
                .route_layer(from_fn(require_auth)),
        )
        .merge(
            Router::new()
                .route(
                    "/api/instructor/clients/:client_id",
                    get(instructor_controller::client_details),
                )
                .route_layer(from_fn_with_state(app_state.clone(), protect::instructor))
                .route_layer(from_fn(require_auth)),
        )
        .with_state(app_state)
}

fn meal_food_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/meal-foods", get(meal_food_controller::index))
        .merge(admin_only(
            Router::new()
                .route("/api/meal-foods", post(meal_food_controller::create))
                .route(
                    "/api/meal-foods/:id",
                    put(meal_food_controller::update).delete(meal_food_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn meal_plan_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/meal-plans", get(meal_plan_controller::index))
        .route("/api/meal-plans/:id", get(meal_plan_controller::read))
        .route(
            "/api/meal-plans/:id/days/:day",
            get(meal_plan_controller::daily_summary),
        )
        .merge(admin_only(
            Router::new()
                .route("/api/meal-plans", post(meal_plan_controller::create))
                .route(
                    "/api/meal-plans/:id",
                    put(meal_plan_controller::update).delete(meal_plan_controller::delete),
                ),
            &app_state,
        ))
        .with_state(app_state)
}

fn meal_plan_user_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/api/meal-plan-users",
            get(meal_plan_user_controller::index).post(meal_plan_user_controller::create),
        )
        .route(
            "/api/meal-plan-users/:id",
            get(meal_plan_user_controller::read).delete(meal_plan_user_controller::delete),
        )
        .route(
            "/api/meal-plan-users/:id/progress",
            post(meal_plan_user_controller::tick_day),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn subscription_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/subscriptions",
            get(subscription_controller::index).post(subscription_controller::create),
        )
        .route("/subscriptions/:id", get(subscription_controller::read))
        .route(
            "/subscriptions/:id/renew",
            post(subscription_controller::renew),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn user_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/register", post(user_controller::register))
        .merge(
            Router::new()
                .route("/api/users", get(user_controller::index))
                .route(
                    "/api/user/profile",
                    get(user_controller::profile).patch(user_controller::update_profile),
                )
                .route("/api/user/password", put(user_controller::change_password))
                .route(
                    "/api/user/assigned-instructors",
                    get(user_controller::assigned_instructors),
                )
                .route_layer(from_fn(require_auth)),
        )
        .merge(admin_only(
            Router::new().route(
                "/api/users/:id",
                axum::routing::delete(user_controller::delete),
            ),
            &app_state,
        ))
        .with_state(app_state)
}

fn user_session_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(user_session_controller::login))
        .merge(
            Router::new()
                .route("/logout", post(user_session_controller::logout))
                .route_layer(from_fn(require_auth)),
        )
        .with_state(app_state)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use axum_login::{
        tower_sessions::{MemoryStore, SessionManagerLayer},
        AuthManagerLayerBuilder,
    };
    use chrono::{NaiveDate, Utc};
    use clap::Parser;
    use domain::{
        challenge_muscle_group::ChallengeMuscleGroup, challenges, difficulty::Difficulty,
        user::Backend, workout_type::WorkoutType, Id,
    };
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use service::config::{ApiVersion, Config};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(db: DatabaseConnection) -> Router {
        let db = Arc::new(db);
        let app_state = AppState::new(Config::parse_from(["fitlife"]), &db);
        let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
        let auth_layer = AuthManagerLayerBuilder::new(Backend::new(&db), session_layer).build();

        define_routes(app_state).layer(auth_layer)
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    fn versioned_get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(ApiVersion::field_name(), ApiVersion::default_version())
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_answers_without_a_version_header() -> anyhow::Result<()> {
        let response = app_with(empty_db())
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn api_routes_reject_a_missing_version_header() -> anyhow::Result<()> {
        let response = app_with(empty_db())
            .oneshot(Request::builder().uri("/api/challenges").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn challenges_are_listed_without_logging_in() -> anyhow::Result<()> {
        let challenge = challenges::Model {
            id: Id::new_v4(),
            title: "Plank month".to_string(),
            description: "Hold a plank every day".to_string(),
            duration: "30 days".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            difficulty: Difficulty::Beginner,
            muscle_group: ChallengeMuscleGroup::Core,
            workout_type: WorkoutType::Strength,
            image_url: None,
            created_at: Utc::now().into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[challenge]])
            .into_connection();

        let response = app_with(db)
            .oneshot(versioned_get("/api/challenges"))
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(json["status_code"], 200);
        assert_eq!(json["data"][0]["title"], "Plank month");
        Ok(())
    }

    #[tokio::test]
    async fn catalog_writes_require_a_session() -> anyhow::Result<()> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/challenges")
            .header(ApiVersion::field_name(), ApiVersion::default_version())
            .header("content-type", "application/json")
            .body(Body::from("{}"))?;

        let response = app_with(empty_db()).oneshot(request).await?;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        Ok(())
    }

    #[tokio::test]
    async fn member_routes_require_a_session() -> anyhow::Result<()> {
        for uri in [
            "/api/goals",
            "/api/user/profile",
            "/api/chat/conversations",
            "/subscriptions",
            "/api/dashboard",
        ] {
            let response = app_with(empty_db()).oneshot(versioned_get(uri)).await?;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_is_served() -> anyhow::Result<()> {
        let response = app_with(empty_db())
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi2.json")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&body)?;
        assert!(json["paths"]["/api/meal-plans/{id}/days/{day}"].is_object());
        Ok(())
    }
}
