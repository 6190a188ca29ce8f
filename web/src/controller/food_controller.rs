use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::food::UpdateParams;
use crate::response::food::FoodResponse;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{food as FoodApi, foods, foods::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/foods",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Foods", body = [FoodResponse])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Foods");

    let foods: Vec<FoodResponse> = FoodApi::find_all(app_state.db_conn_ref())
        .await?
        .into_iter()
        .map(FoodResponse::from)
        .collect();

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), foods)))
}

#[utoipa::path(
    get,
    path = "/api/foods/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Food id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Food", body = FoodResponse),
        (status = 404, description = "Food not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Food by id: {id}");

    let food = FoodApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        FoodResponse::from(food),
    )))
}

#[utoipa::path(
    post,
    path = "/api/foods",
    params(ApiVersion),
    request_body = foods::Model,
    responses(
        (status = 201, description = "Successfully created a new Food", body = FoodResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "A food with that name already exists")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(food_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Food from: {food_model:?}");

    let food = FoodApi::create(app_state.db_conn_ref(), food_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.into(),
            FoodResponse::from(food),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/foods/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Food to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the Food", body = FoodResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Food not found")
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
    debug!("PUT Update Food {id} with: {params:?}");

    let food = FoodApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        FoodResponse::from(food),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/foods/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Food id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the Food"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Food not found")
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
    debug!("DELETE Food by id: {id}");

    FoodApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
