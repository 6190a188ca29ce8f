use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::goal::GoalParams;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::goal as GoalApi;
use service::config::ApiVersion;

use log::*;

/// GET my goal, as a list holding at most one entry.
#[utoipa::path(
    get,
    path = "/api/goals",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my goal"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET goals of user: {}", user.id);

    let goals = GoalApi::find_mine(app_state.db_conn_ref(), user.id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), goals)))
}

/// POST set my goal. An existing goal is updated instead of duplicated.
#[utoipa::path(
    post,
    path = "/api/goals",
    params(ApiVersion),
    request_body = GoalParams,
    responses(
        (status = 201, description = "Successfully created my goal"),
        (status = 200, description = "Successfully updated my existing goal"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(params): Json<GoalParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST goal for user {}: {params:?}", user.id);

    let (goal, existed) = GoalApi::save(app_state.db_conn_ref(), user.id, params.into()).await?;
    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, Json(ApiResponse::new(status.into(), goal))))
}
