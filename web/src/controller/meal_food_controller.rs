use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::meal_plan::{MealFoodIndexParams, UpdateMealFoodParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{meal_foods, meal_foods::Model, meal_plan as MealPlanApi, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/meal-foods",
    params(ApiVersion, MealFoodIndexParams),
    responses(
        (status = 200, description = "Successfully retrieved the Meal Foods", body = [meal_foods::Model])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<MealFoodIndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Meal Foods with filters: {params:?}");

    let meal_foods = MealPlanApi::find_meal_foods_by(app_state.db_conn_ref(), params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), meal_foods)))
}

/// POST add a food portion to a Meal Plan. The response carries the portion's totals.
#[utoipa::path(
    post,
    path = "/api/meal-foods",
    params(ApiVersion),
    request_body = meal_foods::Model,
    responses(
        (status = 201, description = "Successfully added the Meal Food"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Food already served at that meal")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(meal_food_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Meal Food from: {meal_food_model:?}");

    let portion = MealPlanApi::create_meal_food(app_state.db_conn_ref(), meal_food_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), portion)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/meal-foods/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Meal Food to update"),
    ),
    request_body = UpdateMealFoodParams,
    responses(
        (status = 200, description = "Successfully updated the Meal Food"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Meal Food not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateMealFoodParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Meal Food {id} with: {params:?}");

    let portion = MealPlanApi::update_meal_food(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), portion)))
}

#[utoipa::path(
    delete,
    path = "/api/meal-foods/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Meal Food id to delete")
    ),
    responses(
        (status = 200, description = "Successfully removed the Meal Food"),
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
    debug!("DELETE Meal Food by id: {id}");

    MealPlanApi::delete_meal_food(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
