use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::{fitness_plan::JoinParams, TickDayParams};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use domain::{fitness_plan as FitnessPlanApi, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/fitness-plan-users",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my fitness plan participations"),
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
    debug!("GET fitness plan participations for user: {}", user.id);

    let participations =
        FitnessPlanApi::find_participations(app_state.db_conn_ref(), user.id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), participations)))
}

#[utoipa::path(
    post,
    path = "/api/fitness-plan-users",
    params(ApiVersion),
    request_body = JoinParams,
    responses(
        (status = 201, description = "Successfully joined the Fitness Plan"),
        (status = 400, description = "Already following a fitness plan"),
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
    Json(params): Json<JoinParams>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST user {} joins fitness plan {}",
        user.id, params.fitness_plan_id
    );

    let participation =
        FitnessPlanApi::join(app_state.db_conn_ref(), user.id, params.fitness_plan_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), participation)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/fitness-plan-users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Participation id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the participation"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    let participation =
        FitnessPlanApi::find_participation(app_state.db_conn_ref(), user.id, id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), participation)))
}

#[utoipa::path(
    delete,
    path = "/api/fitness-plan-users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Participation id to delete")
    ),
    responses(
        (status = 200, description = "Successfully left the Fitness Plan"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE fitness plan participation {id} of user {}", user.id);

    FitnessPlanApi::leave(app_state.db_conn_ref(), user.id, id).await?;
    Ok(Json(json!({"id": id})))
}

#[utoipa::path(
    post,
    path = "/api/fitness-plan-users/{id}/progress",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Participation id")
    ),
    request_body = TickDayParams,
    responses(
        (status = 200, description = "Successfully ticked the day"),
        (status = 400, description = "Day outside the plan or already ticked"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn tick_day(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<TickDayParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST tick day {} of fitness plan participation {id}", params.day);

    let participation = FitnessPlanApi::tick_day(
        app_state.db_conn_ref(),
        user.id,
        id,
        params.day,
        Utc::now().date_naive(),
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), participation)))
}
