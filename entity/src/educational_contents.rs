//! `SeaORM` Entity for the educational_contents table.

use crate::content_category::ContentCategory;
use crate::content_type::ContentType;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::educational_contents::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "educational_contents")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub content_type: ContentType,
    pub category: ContentCategory,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub upload_date: DateTimeWithTimeZone,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub blog_content: Option<String>,
    #[serde(skip_deserializing)]
    pub views: i32,
    /// Running average of every rating submitted, 0 when unrated
    #[serde(skip_deserializing)]
    pub rating: f64,
    #[serde(skip_deserializing)]
    pub rating_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
