use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Format of a piece of educational content.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "content_type")]
pub enum ContentType {
    #[serde(rename = "video")]
    #[sea_orm(string_value = "video")]
    #[default]
    Video,
    #[serde(rename = "blog")]
    #[sea_orm(string_value = "blog")]
    Blog,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Video => write!(fmt, "video"),
            ContentType::Blog => write!(fmt, "blog"),
        }
    }
}
