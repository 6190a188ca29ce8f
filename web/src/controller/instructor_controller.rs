use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::user::UpdateUserParams;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{instructor as InstructorApi, users, users::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// GET every instructor with the clients assigned to them.
#[utoipa::path(
    get,
    path = "/instructors",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Instructors")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Instructors");

    let instructors = InstructorApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), instructors)))
}

#[utoipa::path(
    get,
    path = "/instructors/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Instructor id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Instructor"),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Instructor by id: {id}");

    let instructor = InstructorApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), instructor)))
}

#[utoipa::path(
    post,
    path = "/instructors",
    params(ApiVersion),
    request_body = users::Model,
    responses(
        (status = 201, description = "Successfully created a new Instructor"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Email, username or contact already taken")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(instructor_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Instructor: {}", instructor_model.email);

    let instructor = InstructorApi::create(app_state.db_conn_ref(), instructor_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), instructor)),
    ))
}

#[utoipa::path(
    put,
    path = "/instructors/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Instructor to update"),
    ),
    request_body = UpdateUserParams,
    responses(
        (status = 200, description = "Successfully updated the Instructor"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Instructor not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateUserParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Instructor {id} with: {params:?}");

    let instructor = InstructorApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), instructor)))
}

#[utoipa::path(
    delete,
    path = "/instructors/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Instructor id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the Instructor"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Instructor not found")
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
    debug!("DELETE Instructor by id: {id}");

    InstructorApi::delete(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}

/// GET the signed-in instructor's profile and subscribed clients.
#[utoipa::path(
    get,
    path = "/api/instructor/dashboard",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved the instructor dashboard"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only instructors can access this dashboard")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn dashboard(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET instructor dashboard for user: {}", user.id);

    let dashboard = InstructorApi::dashboard(app_state.db_conn_ref(), user).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), dashboard)))
}

#[utoipa::path(
    get,
    path = "/api/instructor/clients/{client_id}",
    params(
        ApiVersion,
        ("client_id" = Uuid, Path, description = "Id of a client assigned to me")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the client and their goal"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Client not found or not assigned to you")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn client_details(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(client_id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET client {client_id} for instructor {}", user.id);

    let client = InstructorApi::client_details(app_state.db_conn_ref(), &user, client_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), client)))
}
