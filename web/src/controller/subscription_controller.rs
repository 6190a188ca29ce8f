use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::subscription::SubscribeParams;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{subscription as SubscriptionApi, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/subscriptions",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my subscription"),
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
    debug!("GET subscriptions of user: {}", user.id);

    let subscriptions = SubscriptionApi::find_mine(app_state.db_conn_ref(), user.id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), subscriptions)))
}

/// POST subscribe to a plan. Premium subscribers are matched with a trainer and a nutritionist.
#[utoipa::path(
    post,
    path = "/subscriptions",
    params(ApiVersion),
    request_body = SubscribeParams,
    responses(
        (status = 201, description = "Successfully subscribed"),
        (status = 400, description = "Plan is required"),
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
    Json(params): Json<SubscribeParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST subscribe user {} to {:?}", user.id, params.plan);

    let subscription = SubscriptionApi::subscribe(
        app_state.db_conn_ref(),
        user.id,
        params.plan,
        app_state.subscription_days(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), subscription)),
    ))
}

#[utoipa::path(
    get,
    path = "/subscriptions/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Subscription id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the subscription"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subscription not found")
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
    let subscription = SubscriptionApi::find_by_id(app_state.db_conn_ref(), user.id, id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), subscription)))
}

/// POST renew an expired or inactive subscription
#[utoipa::path(
    post,
    path = "/subscriptions/{id}/renew",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Subscription id to renew")
    ),
    responses(
        (status = 200, description = "Successfully renewed the subscription"),
        (status = 400, description = "Subscription is still active"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Subscription not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn renew(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    info!("POST renew subscription {id} of user {}", user.id);

    let subscription = SubscriptionApi::renew(
        app_state.db_conn_ref(),
        user.id,
        id,
        app_state.subscription_days(),
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), subscription)))
}
