use super::error::Error;
use entity::educational_contents::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, IntoActiveModel, QueryOrder,
    TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, content_model: Model) -> Result<Model, Error> {
    debug!("New Educational Content Model to be inserted: {content_model:?}");

    let active_model = ActiveModel {
        title: Set(content_model.title),
        description: Set(content_model.description),
        content_type: Set(content_model.content_type),
        category: Set(content_model.category),
        upload_date: Set(chrono::Utc::now().into()),
        thumbnail_url: Set(content_model.thumbnail_url),
        video_url: Set(content_model.video_url),
        blog_content: Set(content_model.blog_content),
        views: Set(0),
        rating: Set(0.0),
        rating_count: Set(0),
        ..Default::default()
    };

    Ok(active_model.save(db).await?.try_into_model()?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

/// Newest uploads first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .order_by_desc(Column::UploadDate)
        .all(db)
        .await?)
}

pub async fn count_uploaded_since(
    db: &DatabaseConnection,
    since: DateTimeWithTimeZone,
) -> Result<u64, Error> {
    Ok(Entity::find()
        .filter(Column::UploadDate.gte(since))
        .count(db)
        .await?)
}

/// Writes new `views`, `rating` and `rating_count` values for `content`.
pub async fn update_counters(
    db: &DatabaseConnection,
    content: Model,
    views: i32,
    rating: f64,
    rating_count: i32,
) -> Result<Model, Error> {
    let mut active_model = content.into_active_model();
    active_model.views = Set(views);
    active_model.rating = Set(rating);
    active_model.rating_count = Set(rating_count);

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let content = find_by_id(db, id).await?;
    content.delete(db).await?;
    Ok(())
}
