use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::exercise::UpdateParams;
use crate::response::exercise::ExerciseResponse;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{exercise as ExerciseApi, exercises, exercises::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/exercises",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Exercises", body = [ExerciseResponse])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Exercises");

    let exercises: Vec<ExerciseResponse> = ExerciseApi::find_all(app_state.db_conn_ref())
        .await?
        .into_iter()
        .map(ExerciseResponse::from)
        .collect();

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), exercises)))
}

#[utoipa::path(
    get,
    path = "/api/exercises/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Exercise id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Exercise", body = ExerciseResponse),
        (status = 404, description = "Exercise not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Exercise by id: {id}");

    let exercise = ExerciseApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        ExerciseResponse::from(exercise),
    )))
}

#[utoipa::path(
    post,
    path = "/api/exercises",
    params(ApiVersion),
    request_body = exercises::Model,
    responses(
        (status = 201, description = "Successfully created a new Exercise", body = ExerciseResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "An exercise with that name already exists")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(exercise_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Exercise from: {exercise_model:?}");

    let exercise = ExerciseApi::create(app_state.db_conn_ref(), exercise_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.into(),
            ExerciseResponse::from(exercise),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/exercises/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Exercise to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the Exercise", body = ExerciseResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Exercise not found")
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
    debug!("PUT Update Exercise {id} with: {params:?}");

    let exercise = ExerciseApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        ExerciseResponse::from(exercise),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/exercises/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Exercise id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the Exercise"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Exercise not found")
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
    debug!("DELETE Exercise by id: {id}");

    ExerciseApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
