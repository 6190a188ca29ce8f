use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::chat::{IndexParams, ReplyParams, SendParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{chat as ChatApi, chat_messages, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/api/chat/messages",
    params(ApiVersion, IndexParams),
    responses(
        (status = 200, description = "Successfully retrieved my messages", body = [chat_messages::Model]),
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
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    trace!("GET messages of user {} with {params:?}", user.id);

    let messages = ChatApi::find_messages(app_state.db_conn_ref(), user.id, params.other_user).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), messages)))
}

#[utoipa::path(
    post,
    path = "/api/chat/messages",
    params(ApiVersion),
    request_body = SendParams,
    responses(
        (status = 201, description = "Successfully sent the message", body = chat_messages::Model),
        (status = 400, description = "Missing or unknown recipient, or a message to yourself"),
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
    Json(params): Json<SendParams>,
) -> Result<impl IntoResponse, Error> {
    let message = ChatApi::send(
        app_state.db_conn_ref(),
        user.id,
        params.recipient_id,
        params.message,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), message)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/chat/messages/{id}/read",
    params(
        ApiVersion,
        ("id" = Uuid, Path, description = "Message id to mark as read")
    ),
    responses(
        (status = 200, description = "Successfully marked the message as read", body = chat_messages::Model),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only the recipient can mark a message as read"),
        (status = 404, description = "Message not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn mark_read(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("PATCH mark message {id} read by user {}", user.id);

    let message = ChatApi::mark_read(app_state.db_conn_ref(), user.id, id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), message)))
}

/// GET everyone I have exchanged messages with.
#[utoipa::path(
    get,
    path = "/api/chat/conversations",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved my conversation partners"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn conversations(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let partners = ChatApi::conversations(app_state.db_conn_ref(), user.id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), partners)))
}

/// GET the thread with one user. Polled by the profile page.
#[utoipa::path(
    get,
    path = "/api/chat/{user_id}",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "The other participant")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the thread", body = [chat_messages::Model]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn thread(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(other_user_id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    trace!("GET thread between {} and {other_user_id}", user.id);

    let messages =
        ChatApi::find_messages(app_state.db_conn_ref(), user.id, Some(other_user_id)).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), messages)))
}

#[utoipa::path(
    post,
    path = "/api/chat/{user_id}",
    params(
        ApiVersion,
        ("user_id" = Uuid, Path, description = "The recipient")
    ),
    request_body = ReplyParams,
    responses(
        (status = 201, description = "Successfully sent the message", body = chat_messages::Model),
        (status = 400, description = "Unknown recipient, blank message or a message to yourself"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn reply(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(recipient_id): Path<Id>,
    Json(params): Json<ReplyParams>,
) -> Result<impl IntoResponse, Error> {
    let message = ChatApi::send(
        app_state.db_conn_ref(),
        user.id,
        Some(recipient_id),
        params.message,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(StatusCode::CREATED.into(), message)),
    ))
}
