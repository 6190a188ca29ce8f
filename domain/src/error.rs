//! Error types for the `domain` layer.
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. `web` depends on `domain` but never directly on `entity_api`, so
/// every lower-layer error is translated here before it reaches an HTTP response.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
///
/// The `Validation`, `Forbidden` and `NotFound` variants carry a message meant to be
/// shown to the client unchanged.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    Validation(String),
    Forbidden(String),
    NotFound(String),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    Config,
    Other(String),
}

/// Entity errors reduced to the subset of kinds relevant to the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    Unauthenticated,
    Conflict,
    DbTransaction,
    Other(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Validation(message.into()),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Forbidden(message.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::NotFound(message.into()),
        }
    }

    pub fn unauthenticated() -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                EntityErrorKind::Unauthenticated,
            )),
        }
    }

    /// Maps a missing referenced record to a validation failure carrying `message`.
    /// Any other entity error keeps its own kind.
    pub(crate) fn missing_as_validation(
        message: &'static str,
    ) -> impl FnOnce(EntityApiError) -> Error {
        move |err| match err.error_kind {
            EntityApiErrorKind::RecordNotFound => Error::validation(message),
            _ => err.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(message.into())),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let entity_error_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => EntityErrorKind::NotFound,
            EntityApiErrorKind::InvalidQueryTerm | EntityApiErrorKind::ValidationError => {
                EntityErrorKind::Invalid
            }
            EntityApiErrorKind::RecordUnauthenticated => EntityErrorKind::Unauthenticated,
            EntityApiErrorKind::RecordConflict => EntityErrorKind::Conflict,
            EntityApiErrorKind::SystemError => EntityErrorKind::DbTransaction,
            _ => EntityErrorKind::Other("EntityErrorKind".to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(entity_error_kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_as_validation_only_rewrites_not_found() {
        let missing =
            Error::missing_as_validation("Food does not exist")(EntityApiError::not_found());
        assert_eq!(
            missing.error_kind,
            DomainErrorKind::Validation("Food does not exist".to_string())
        );

        let system = Error::missing_as_validation("Food does not exist")(EntityApiError {
            source: None,
            error_kind: EntityApiErrorKind::SystemError,
        });
        assert_eq!(
            system.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::DbTransaction))
        );
    }

    #[test]
    fn record_conflict_becomes_entity_conflict() {
        let err: Error = EntityApiError {
            source: None,
            error_kind: EntityApiErrorKind::RecordConflict,
        }
        .into();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict))
        );
        assert!(err.source.is_some());
    }

    #[test]
    fn validation_keeps_the_message() {
        let err = Error::validation("Day is already ticked.");
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Day is already ticked.".to_string())
        );
    }
}
