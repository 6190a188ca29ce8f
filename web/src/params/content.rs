use domain::{
    content_category::ContentCategory, content_type::ContentType, IntoUpdateMap, UpdateMap,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::set;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content_type: Option<ContentType>,
    pub category: Option<ContentCategory>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub blog_content: Option<String>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "title", self.title);
        set(&mut update_map, "description", self.description);
        set(&mut update_map, "content_type", self.content_type);
        set(&mut update_map, "category", self.category);
        set(&mut update_map, "thumbnail_url", self.thumbnail_url);
        set(&mut update_map, "video_url", self.video_url);
        set(&mut update_map, "blog_content", self.blog_content);
        update_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RateParams {
    pub rating: f64,
}
