use crate::extractors::RejectionType;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use log::*;
use semver::Version;
use service::config::ApiVersion;

/// Rejects requests whose `x-version` header is missing or names a version this
/// server does not expose.
pub(crate) struct CompareApiVersion(pub Version);

#[async_trait]
impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ApiVersion::field_name())
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Missing {} header", ApiVersion::field_name()),
                )
            })?;

        let version = Version::parse(header.trim()).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid {} header: {header}", ApiVersion::field_name()),
            )
        })?;

        let supported = ApiVersion::versions()
            .iter()
            .filter_map(|known| Version::parse(known).ok())
            .any(|known| known == version);

        if supported {
            Ok(CompareApiVersion(version))
        } else {
            warn!("Rejected request for unsupported API version {version}");
            Err((
                StatusCode::BAD_REQUEST,
                format!(
                    "Unsupported API version {version}, expected {}",
                    ApiVersion::default_version()
                ),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<CompareApiVersion, RejectionType> {
        let mut builder = Request::builder().uri("/");
        if let Some(header) = header {
            builder = builder.header(ApiVersion::field_name(), header);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CompareApiVersion::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn accepts_the_default_version() {
        let CompareApiVersion(version) = extract(Some(ApiVersion::default_version()))
            .await
            .unwrap();
        assert_eq!(version.to_string(), ApiVersion::default_version());
    }

    #[tokio::test]
    async fn rejects_a_missing_header() {
        let (status, _) = extract(None).await.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_unknown_versions() {
        let (status, message) = extract(Some("9.0.0")).await.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("9.0.0"));
    }
}
