use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::challenge::UpdateParams;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{challenge as ChallengeApi, challenges, challenges::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// GET all Challenges, newest first.
#[utoipa::path(
    get,
    path = "/api/challenges",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Challenges", body = [challenges::Model]),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Challenges");

    let challenges = ChallengeApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), challenges)))
}

/// GET a particular Challenge specified by its id.
#[utoipa::path(
    get,
    path = "/api/challenges/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Challenge id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Challenge", body = challenges::Model),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Challenge by id: {id}");

    let challenge = ChallengeApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), challenge)))
}

/// POST create a new Challenge
#[utoipa::path(
    post,
    path = "/api/challenges",
    params(ApiVersion),
    request_body = challenges::Model,
    responses(
        (status = 201, description = "Successfully created a new Challenge", body = challenges::Model),
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
    Json(challenge_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Challenge from: {challenge_model:?}");

    let challenge = ChallengeApi::create(app_state.db_conn_ref(), challenge_model).await?;

    debug!("New Challenge: {challenge:?}");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), challenge)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/challenges/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Challenge to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the Challenge", body = challenges::Model),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Challenge not found")
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
    debug!("PUT Update Challenge {id} with: {params:?}");

    let challenge = ChallengeApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), challenge)))
}

/// DELETE a Challenge specified by its primary key.
#[utoipa::path(
    delete,
    path = "/api/challenges/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Challenge id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the Challenge"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Challenge not found")
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
    debug!("DELETE Challenge by id: {id}");

    ChallengeApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
