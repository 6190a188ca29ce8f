use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::content::{RateParams, UpdateParams};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{content as ContentApi, educational_contents, educational_contents::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// GET all Educational Content, newest first.
#[utoipa::path(
    get,
    path = "/education",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all content", body = [educational_contents::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Educational Content");

    let contents = ContentApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), contents)))
}

#[utoipa::path(
    get,
    path = "/education/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Content id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the content", body = educational_contents::Model),
        (status = 404, description = "Content not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Educational Content by id: {id}");

    let content = ContentApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), content)))
}

/// POST publish a video or blog post
#[utoipa::path(
    post,
    path = "/education",
    params(ApiVersion),
    request_body = educational_contents::Model,
    responses(
        (status = 201, description = "Successfully created the content", body = educational_contents::Model),
        (status = 400, description = "Missing video url or blog content"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(content_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create new Educational Content: {}", content_model.title);

    let content = ContentApi::create(app_state.db_conn_ref(), content_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), content)),
    ))
}

#[utoipa::path(
    put,
    path = "/education/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the content to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the content", body = educational_contents::Model),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Content not found")
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
    debug!("PUT Update Educational Content {id} with: {params:?}");

    let content = ContentApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), content)))
}

#[utoipa::path(
    delete,
    path = "/education/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Content id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the content"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Content not found")
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
    debug!("DELETE Educational Content by id: {id}");

    ContentApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}

/// POST count one more view of the content
#[utoipa::path(
    post,
    path = "/education/{id}/views",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Content id")
    ),
    responses(
        (status = 200, description = "Successfully counted the view", body = educational_contents::Model),
        (status = 404, description = "Content not found")
    )
)]
pub async fn increment_views(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    trace!("POST view of Educational Content {id}");

    let content = ContentApi::increment_views(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), content)))
}

/// POST rate the content from 1 to 5
#[utoipa::path(
    post,
    path = "/education/{id}/rate",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Content id")
    ),
    request_body = RateParams,
    responses(
        (status = 200, description = "Successfully rated the content", body = educational_contents::Model),
        (status = 400, description = "Rating must be between 1 and 5"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Content not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn rate(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<RateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST rating {} for Educational Content {id}", params.rating);

    let content = ContentApi::rate(app_state.db_conn_ref(), id, params.rating).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), content)))
}
