use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::fitness_plan::{CreateParams, UpdateParams};
use crate::response::plan::FitnessPlanResponse;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{fitness_plan as FitnessPlanApi, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/fitness-plans",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Fitness Plans", body = [FitnessPlanResponse])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Fitness Plans");

    let plans: Vec<FitnessPlanResponse> = FitnessPlanApi::find_all(app_state.db_conn_ref())
        .await?
        .into_iter()
        .map(FitnessPlanResponse::from)
        .collect();

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), plans)))
}

/// GET a Fitness Plan with its scheduled exercises.
#[utoipa::path(
    get,
    path = "/api/fitness-plans/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Fitness Plan id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Fitness Plan"),
        (status = 404, description = "Fitness Plan not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Fitness Plan by id: {id}");

    let plan = FitnessPlanApi::find_detail(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), plan)))
}

/// POST create a Fitness Plan, optionally with nested exercises
#[utoipa::path(
    post,
    path = "/api/fitness-plans",
    params(ApiVersion),
    request_body = CreateParams,
    responses(
        (status = 201, description = "Successfully created a new Fitness Plan"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Fitness Plan from: {params:?}");

    let exercises = params.exercises.into_iter().map(Into::into).collect();
    let plan = FitnessPlanApi::create(app_state.db_conn_ref(), params.plan, exercises).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), plan)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/fitness-plans/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Fitness Plan to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the Fitness Plan", body = FitnessPlanResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Fitness Plan not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Fitness Plan {id} with: {params:?}");

    let plan = FitnessPlanApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        FitnessPlanResponse::from(plan),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/fitness-plans/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Fitness Plan id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the Fitness Plan"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Fitness Plan not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE Fitness Plan by id: {id}");

    FitnessPlanApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
