use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE},
    HeaderName, HeaderValue, Method,
};
use axum_login::AuthManagerLayerBuilder;
use domain::user::Backend;
use log::*;
use service::config::ApiVersion;
use std::io;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_sessions::{cookie::SameSite, ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

pub use error::Error;
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod middleware;
mod params;
mod protect;
mod response;
mod router;

const CORS_MAX_AGE_SECS: u64 = 24 * 60 * 60;
const SESSION_CLEANUP_INTERVAL_SECS: u64 = 60;

pub async fn init_server(app_state: AppState) -> io::Result<()> {
    info!(
        "Connecting session store to DB schema: {}",
        app_state.config.database_schema
    );

    let session_store = PostgresStore::new(
        app_state
            .db_conn_ref()
            .get_postgres_connection_pool()
            .to_owned(),
    )
    .with_schema_name(&app_state.config.database_schema)
    .map_err(io::Error::other)?
    .with_table_name("authorized_sessions")
    .map_err(io::Error::other)?;

    session_store.migrate().await.map_err(io::Error::other)?;

    let deletion_task = tokio::task::spawn(session_store.clone().continuously_delete_expired(
        tokio::time::Duration::from_secs(SESSION_CLEANUP_INTERVAL_SECS),
    ));

    let expiry_seconds =
        i64::try_from(app_state.config.backend_session_expiry_seconds).unwrap_or(i64::MAX);
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(app_state.config.is_production())
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(expiry_seconds)));

    let backend = Backend::new(&app_state.database_connection);
    let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

    let interface = app_state.config.interface.as_deref().unwrap_or("127.0.0.1");
    let server_url = format!("{interface}:{}", app_state.config.port);
    let listener = TcpListener::bind(&server_url).await?;

    let cors_layer = CorsLayer::new()
        .allow_methods([
            Method::DELETE,
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::POST,
            Method::PUT,
        ])
        .allow_credentials(true)
        .allow_headers([
            AUTHORIZATION,
            ACCEPT,
            COOKIE,
            CONTENT_TYPE,
            HeaderName::from_static(ApiVersion::field_name()),
        ])
        .allow_origin(allowed_origins(&app_state.config.allowed_origins))
        .max_age(std::time::Duration::from_secs(CORS_MAX_AGE_SECS));

    info!("Server starting... listening for connections on http://{server_url}");

    axum::serve(
        listener,
        router::define_routes(app_state)
            .layer(cors_layer)
            .layer(auth_layer)
            .into_make_service(),
    )
    .await?;

    deletion_task
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;

    Ok(())
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();
    debug!("CORS allowed origins: {origins:?}");
    AllowOrigin::list(origins)
}
