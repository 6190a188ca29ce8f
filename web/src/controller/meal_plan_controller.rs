use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::meal_plan::{IndexParams, UpdateParams};
use crate::response::plan::MealPlanResponse;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{meal_plan as MealPlanApi, meal_plans, meal_plans::Model, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/meal-plans",
    params(ApiVersion, IndexParams),
    responses(
        (status = 200, description = "Successfully retrieved the Meal Plans", body = [MealPlanResponse])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Meal Plans with filters: {params:?}");

    let plans: Vec<MealPlanResponse> =
        MealPlanApi::find_all(app_state.db_conn_ref(), params.plan_type)
            .await?
            .into_iter()
            .map(MealPlanResponse::from)
            .collect();

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), plans)))
}

/// GET a Meal Plan with every portion and the plan's nutrition totals.
#[utoipa::path(
    get,
    path = "/api/meal-plans/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Meal Plan id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Meal Plan"),
        (status = 404, description = "Meal Plan not found")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Meal Plan by id: {id}");

    let plan = MealPlanApi::find_detail(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), plan)))
}

/// GET the portions and nutrition totals of one day of a Meal Plan.
#[utoipa::path(
    get,
    path = "/api/meal-plans/{id}/days/{day}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Meal Plan id"),
        ("day" = i32, Path, description = "Day of the plan, starting at 1")
    ),
    responses(
        (status = 200, description = "Successfully summarized the day"),
        (status = 400, description = "Day outside the plan duration"),
        (status = 404, description = "Meal Plan not found")
    )
)]
pub async fn daily_summary(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path((id, day)): Path<(Id, i32)>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET daily summary of Meal Plan {id} for day {day}");

    let summary = MealPlanApi::daily_summary(app_state.db_conn_ref(), id, day).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), summary)))
}

#[utoipa::path(
    post,
    path = "/api/meal-plans",
    params(ApiVersion),
    request_body = meal_plans::Model,
    responses(
        (status = 201, description = "Successfully created a new Meal Plan", body = MealPlanResponse),
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
    Json(plan_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Meal Plan from: {plan_model:?}");

    let plan = MealPlanApi::create(app_state.db_conn_ref(), plan_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.into(),
            MealPlanResponse::from(plan),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/meal-plans/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Id of the Meal Plan to update"),
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the Meal Plan", body = MealPlanResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Meal Plan not found")
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
    debug!("PUT Update Meal Plan {id} with: {params:?}");

    let plan = MealPlanApi::update(app_state.db_conn_ref(), id, params).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        MealPlanResponse::from(plan),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/meal-plans/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Meal Plan id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the Meal Plan"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Meal Plan not found")
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
    debug!("DELETE Meal Plan by id: {id}");

    MealPlanApi::delete_by_id(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}
