use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::fitness_plan::{ExerciseIndexParams, UpdateExerciseParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{
    fitness_plan as FitnessPlanApi, fitness_plan_exercises, fitness_plan_exercises::Model, Id,
};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/fitness-plan-exercises",
    params(ApiVersion, ExerciseIndexParams),
    responses(
        (status = 200, description = "Successfully retrieved the scheduled exercises", body = [fitness_plan_exercises::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<ExerciseIndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Fitness Plan Exercises with filters: {params:?}");

    let exercises = FitnessPlanApi::find_exercises_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), exercises)))
}

#[utoipa::path(
    post,
    path = "/api/fitness-plan-exercises",
    params(ApiVersion),
    request_body = fitness_plan_exercises::Model,
    responses(
        (status = 201, description = "Successfully scheduled the exercise", body = fitness_plan_exercises::Model),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Exercise already scheduled on that day")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(plan_exercise): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Schedule a Fitness Plan Exercise: {plan_exercise:?}");

    let plan_exercise = FitnessPlanApi::create_exercise(app_state.db_conn_ref(), plan_exercise).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), plan_exercise)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/fitness-plan-exercises/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the scheduled exercise to update"),
    ),
    request_body = UpdateExerciseParams,
    responses(
        (status = 200, description = "Successfully updated the scheduled exercise", body = fitness_plan_exercises::Model),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Scheduled exercise not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateExerciseParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Fitness Plan Exercise {id} with: {params:?}");

    let plan_exercise = FitnessPlanApi::update_exercise(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), plan_exercise)))
}

#[utoipa::path(
    delete,
    path = "/api/fitness-plan-exercises/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Scheduled exercise id to delete")
    ),
    responses(
        (status = 200, description = "Successfully removed the exercise from the plan"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
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
    debug!("DELETE Fitness Plan Exercise by id: {id}");

    FitnessPlanApi::delete_exercise(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
