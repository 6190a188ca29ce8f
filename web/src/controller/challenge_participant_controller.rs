use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::{challenge::JoinParams, TickDayParams};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use domain::{challenge as ChallengeApi, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// GET the challenges the authenticated user has joined.
#[utoipa::path(
    get,
    path = "/api/challenge-participants",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my challenge participations"),
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
    debug!("GET challenge participations for user: {}", user.id);

    let participations = ChallengeApi::find_participations(
        app_state.db_conn_ref(),
        user.id,
        app_state.challenge_max_days(),
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), participations)))
}

/// POST join a challenge
#[utoipa::path(
    post,
    path = "/api/challenge-participants",
    params(ApiVersion),
    request_body = JoinParams,
    responses(
        (status = 201, description = "Successfully joined the Challenge"),
        (status = 400, description = "Already enrolled or the challenge does not exist"),
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
    Json(params): Json<JoinParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST user {} joins challenge {}", user.id, params.challenge_id);

    let participation = ChallengeApi::join(
        app_state.db_conn_ref(),
        user.id,
        params.challenge_id,
        Utc::now().date_naive(),
        app_state.challenge_max_days(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), participation)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/challenge-participants/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Participation id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the participation"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
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
    let participation = ChallengeApi::find_participation(
        app_state.db_conn_ref(),
        user.id,
        id,
        app_state.challenge_max_days(),
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), participation)))
}

/// DELETE leave a challenge
#[utoipa::path(
    delete,
    path = "/api/challenge-participants/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Participation id to delete")
    ),
    responses(
        (status = 200, description = "Successfully left the Challenge"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE challenge participation {id} of user {}", user.id);

    ChallengeApi::leave(app_state.db_conn_ref(), user.id, id).await?;
    Ok(Json(json!({"id": id})))
}

/// POST mark one day of a joined challenge as done
#[utoipa::path(
    post,
    path = "/api/challenge-participants/{id}/progress",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Participation id")
    ),
    request_body = TickDayParams,
    responses(
        (status = 200, description = "Successfully ticked the day"),
        (status = 400, description = "Day outside the challenge, already ticked or challenge inactive"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participation not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn tick_day(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<TickDayParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST tick day {} of challenge participation {id}", params.day);

    let participation = ChallengeApi::tick_day(
        app_state.db_conn_ref(),
        user.id,
        id,
        params.day,
        Utc::now().date_naive(),
        app_state.challenge_max_days(),
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), participation)))
}
