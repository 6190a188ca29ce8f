use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, EntityErrorKind, Error as DomainError, InternalErrorKind};

extern crate log;
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.0.error_kind {
            DomainErrorKind::Validation(message) => {
                debug!("Validation failed: {message}");
                error_body(StatusCode::BAD_REQUEST, message)
            }
            DomainErrorKind::Forbidden(message) => error_body(StatusCode::FORBIDDEN, message),
            DomainErrorKind::NotFound(message) => error_body(StatusCode::NOT_FOUND, message),
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => {
                        (StatusCode::NOT_FOUND, "NOT FOUND").into_response()
                    }
                    EntityErrorKind::Invalid => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE ENTITY").into_response()
                    }
                    EntityErrorKind::Unauthenticated => {
                        (StatusCode::UNAUTHORIZED, "UNAUTHORIZED").into_response()
                    }
                    EntityErrorKind::Conflict => {
                        error_body(StatusCode::CONFLICT, "A record with these values already exists")
                    }
                    EntityErrorKind::DbTransaction | EntityErrorKind::Other(_) => {
                        error!("Entity error: {:?}", self.0.source);
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                    }
                },
                InternalErrorKind::Config | InternalErrorKind::Other(_) => {
                    error!("Internal error: {:?}", self.0.source);
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
                }
            },
        }
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn entity_error(kind: EntityErrorKind) -> Error {
        Error(DomainError {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(kind)),
        })
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests_with_the_message() {
        let response = Error(DomainError::validation("Day is already ticked.")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Day is already ticked."})
        );
    }

    #[tokio::test]
    async fn forbidden_and_not_found_keep_their_messages() {
        let forbidden =
            Error(DomainError::forbidden("Only instructors can access this dashboard"))
                .into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let not_found =
            Error(DomainError::not_found("Client not found or not assigned to you")).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(not_found).await,
            json!({"error": "Client not found or not assigned to you"})
        );
    }

    #[test]
    fn entity_errors_map_to_status_codes() {
        let cases = [
            (EntityErrorKind::NotFound, StatusCode::NOT_FOUND),
            (EntityErrorKind::Invalid, StatusCode::UNPROCESSABLE_ENTITY),
            (EntityErrorKind::Unauthenticated, StatusCode::UNAUTHORIZED),
            (EntityErrorKind::Conflict, StatusCode::CONFLICT),
            (EntityErrorKind::DbTransaction, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (kind, status) in cases {
            assert_eq!(entity_error(kind).into_response().status(), status);
        }
    }
}
