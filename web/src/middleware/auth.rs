use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use domain::user::AuthSession;
use serde_json::json;

/// Answers 401 for requests without a logged in session.
///
/// `axum_login::login_required!` redirects to a login URL, which is not what a JSON API
/// client expects.
pub async fn require_auth(auth_session: AuthSession, request: Request, next: Next) -> Response {
    match auth_session.user {
        Some(_user) => next.run(request).await,
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Authentication credentials were not provided."})),
        )
            .into_response(),
    }
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn,
        response::Response,
        routing::get,
        Router,
    };
    use axum_login::{
        tower_sessions::{Expiry, MemoryStore, SessionManagerLayer},
        AuthManagerLayerBuilder,
    };
    use clap::Parser;
    use domain::user::Backend;
    use service::config::Config;
    use std::sync::Arc;
    use time::Duration;
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "authenticated"
    }

    fn app_with(db: sea_orm::DatabaseConnection) -> Router {
        let config = Config::parse_from(["fitlife"]);
        let db = Arc::new(db);
        let app_state = crate::AppState::new(config, &db);

        let session_layer = SessionManagerLayer::new(MemoryStore::default())
            .with_secure(false)
            .with_expiry(Expiry::OnInactivity(Duration::days(1)))
            .with_always_save(true);
        let auth_layer = AuthManagerLayerBuilder::new(Backend::new(&db), session_layer).build();

        Router::new()
            .route(
                "/login",
                axum::routing::post(crate::controller::user_session_controller::login),
            )
            .merge(
                Router::new()
                    .route("/test", get(test_handler))
                    .route_layer(from_fn(require_auth)),
            )
            .layer(auth_layer)
            .with_state(app_state)
    }

    #[tokio::test]
    async fn require_auth_returns_401_with_no_session() {
        let app = app_with(
            sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection(),
        );

        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let response: Response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn require_auth_returns_401_with_invalid_session_cookie() {
        let app = app_with(
            sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection(),
        );

        let request = Request::builder()
            .uri("/test")
            .header("cookie", "id=invalid-session-id")
            .body(Body::empty())
            .unwrap();
        let response: Response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn require_auth_allows_authenticated_request_to_proceed() {
        use chrono::Utc;
        use domain::{roles::Role, users, Id};
        use password_auth::generate_hash;
        use sea_orm::{DatabaseBackend, MockDatabase};

        let test_user = users::Model {
            id: Id::new_v4(),
            email: "member@fitlife.app".to_string(),
            username: "member".to_string(),
            first_name: "Test".to_string(),
            last_name: "Member".to_string(),
            password: generate_hash("password2"),
            age: Some(28),
            height: Some(180.0),
            weight: Some(75.0),
            birthday: None,
            profile_picture_url: None,
            role: Role::User,
            is_instructor: false,
            contact: None,
            experience: None,
            bio: None,
            specialization: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        };

        let app = app_with(
            MockDatabase::new(DatabaseBackend::Postgres)
                // find_by_email during authenticate
                .append_query_results([[test_user.clone()]])
                // get_user while loading the session
                .append_query_results([[test_user.clone()]])
                .append_query_results([[test_user.clone()]])
                .into_connection(),
        );

        let login_request = Request::builder()
            .uri("/login")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"email":"member@fitlife.app","password":"password2"}"#,
            ))
            .unwrap();

        let login_response = app.clone().oneshot(login_request).await.unwrap();
        assert_eq!(login_response.status(), StatusCode::OK);

        let cookie = login_response
            .headers()
            .get("set-cookie")
            .and_then(|c| c.to_str().ok())
            .expect("Login should return session cookie");

        let protected_request = Request::builder()
            .uri("/test")
            .header("cookie", cookie)
            .body(Body::empty())
            .unwrap();

        let response: Response = app.oneshot(protected_request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
