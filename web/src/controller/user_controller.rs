use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::user::{PasswordParams, RegisterParams, UpdateUserParams};
use crate::response::session::RegisteredUser;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{instructor as InstructorApi, user as UserApi, users, Id};
use serde_json::json;
use service::config::ApiVersion;

use log::*;

/// POST sign up a new member
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterParams,
    responses(
        (status = 201, description = "Successfully registered", body = RegisteredUser),
        (status = 400, description = "Missing field, weak or mismatched password, or a taken email or username")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(params): Json<RegisterParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST register {:?}", params.email);

    let user = UserApi::register(app_state.db_conn_ref(), params.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.into(),
            RegisteredUser::from(user),
        )),
    ))
}

/// GET every regular member. Admins and instructors are left out.
#[utoipa::path(
    get,
    path = "/api/users",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved the members", body = [users::Model]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET regular users");

    let users = UserApi::find_regular_users(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), users)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "User id to delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted the user"),
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
    info!("DELETE user by id: {id}");

    UserApi::delete(app_state.db_conn_ref(), id).await?;
    Ok(Json(json!({"id": id})))
}

#[utoipa::path(
    get,
    path = "/api/user/profile",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my profile", body = users::Model),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn profile(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    Ok(Json(ApiResponse::new(StatusCode::OK.into(), user)))
}

#[utoipa::path(
    patch,
    path = "/api/user/profile",
    params(ApiVersion),
    request_body = UpdateUserParams,
    responses(
        (status = 200, description = "Successfully updated my profile", body = users::Model),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email, username or contact already taken")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_profile(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(params): Json<UpdateUserParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PATCH profile of user {} with: {params:?}", user.id);

    let user = UserApi::update_profile(app_state.db_conn_ref(), user.id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), user)))
}

/// PUT change my password. The current session stays signed in.
#[utoipa::path(
    put,
    path = "/api/user/password",
    params(ApiVersion),
    request_body = PasswordParams,
    responses(
        (status = 200, description = "Successfully changed my password"),
        (status = 400, description = "Wrong current password, mismatch or weak password"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn change_password(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    mut auth_session: UserApi::AuthSession,
    State(app_state): State<AppState>,
    Json(params): Json<PasswordParams>,
) -> Result<impl IntoResponse, Error> {
    let user = UserApi::change_password(
        app_state.db_conn_ref(),
        user,
        &params.current_password,
        params.new_password,
        &params.confirm_password,
    )
    .await?;

    // The session hash follows the password hash, so the session is renewed here.
    if let Err(login_error) = auth_session.login(&user).await {
        warn!("Failed to renew session after a password change: {login_error:?}");
    }

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        json!({"message": "Password updated successfully"}),
    )))
}

/// GET the trainer and nutritionist assigned through my subscription.
#[utoipa::path(
    get,
    path = "/api/user/assigned-instructors",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my instructors", body = [users::Model]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn assigned_instructors(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let instructors = InstructorApi::assigned_to(app_state.db_conn_ref(), user.id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), instructors)))
}
