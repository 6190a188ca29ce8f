use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::dashboard as DashboardApi;
use service::config::ApiVersion;

use log::*;

/// GET platform totals and recent activity for administrators.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully summarized the platform"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET admin dashboard");

    let dashboard = DashboardApi::summary(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), dashboard)))
}
