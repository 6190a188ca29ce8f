//! Educational content: videos and blog posts.
use crate::content_type::ContentType;
use crate::educational_contents::{ActiveModel, Column, Model};
use crate::error::Error;
use crate::Id;
use entity_api::{educational_content, mutate, IntoUpdateMap};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::educational_content::{delete_by_id, find_all, find_by_id};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |value| value.trim().is_empty())
}

fn validate(content: &Model) -> Result<(), Error> {
    if content.title.trim().is_empty() {
        return Err(Error::validation("Title is required."));
    }
    match content.content_type {
        ContentType::Video if is_blank(&content.video_url) => Err(Error::validation(
            "Video URL is required for video content",
        )),
        ContentType::Blog if is_blank(&content.blog_content) => Err(Error::validation(
            "Blog content is required for blog posts",
        )),
        _ => Ok(()),
    }
}

pub async fn create(db: &DatabaseConnection, content_model: Model) -> Result<Model, Error> {
    validate(&content_model)?;
    Ok(educational_content::create(db, content_model).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, id).await?;
    let active_model =
        mutate::apply::<ActiveModel, Column>(existing.into_active_model(), &params.into_update_map());
    validate(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

pub async fn increment_views(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    let content = find_by_id(db, id).await?;
    let (views, rating, rating_count) = (content.views + 1, content.rating, content.rating_count);
    Ok(educational_content::update_counters(db, content, views, rating, rating_count).await?)
}

/// Folds `rating` into the running average.
pub fn rolling_average(current: f64, count: i32, rating: f64) -> (f64, i32) {
    let count = count.max(0);
    let total = current * count as f64 + rating;
    let count = count + 1;
    (((total / count as f64) * 100.0).round() / 100.0, count)
}

pub async fn rate(db: &DatabaseConnection, id: Id, rating: f64) -> Result<Model, Error> {
    if !(1.0..=5.0).contains(&rating) {
        return Err(Error::validation("Rating must be between 1 and 5"));
    }

    let content = find_by_id(db, id).await?;
    let (average, rating_count) = rolling_average(content.rating, content.rating_count, rating);
    debug!("Content {id} rated {rating}, average now {average} over {rating_count} ratings");

    let views = content.views;
    Ok(educational_content::update_counters(db, content, views, average, rating_count).await?)
}

pub async fn count_uploaded_since(
    db: &DatabaseConnection,
    since: chrono::DateTime<chrono::FixedOffset>,
) -> Result<u64, Error> {
    Ok(educational_content::count_uploaded_since(db, since).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;
    use entity_api::content_category::ContentCategory;

    fn content(content_type: ContentType) -> Model {
        Model {
            id: Id::new_v4(),
            title: "Warm up properly".to_owned(),
            description: "Why warming up matters".to_owned(),
            content_type,
            category: ContentCategory::Workouts,
            upload_date: chrono::Utc::now().into(),
            thumbnail_url: None,
            video_url: None,
            blog_content: None,
            views: 0,
            rating: 0.0,
            rating_count: 0,
        }
    }

    #[test]
    fn video_requires_a_url() {
        let err = validate(&content(ContentType::Video)).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Video URL is required for video content".to_string())
        );

        let video = Model {
            video_url: Some("https://videos.example/warmup".to_owned()),
            ..content(ContentType::Video)
        };
        assert!(validate(&video).is_ok());
    }

    #[test]
    fn blog_requires_content() {
        let blog = Model {
            blog_content: Some("   ".to_owned()),
            ..content(ContentType::Blog)
        };
        let err = validate(&blog).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Blog content is required for blog posts".to_string())
        );
    }

    #[test]
    fn rolling_average_starts_from_the_first_rating() {
        assert_eq!(rolling_average(0.0, 0, 4.0), (4.0, 1));
    }

    #[test]
    fn rolling_average_stays_between_one_and_five() {
        let (average, count) = [5.0, 1.0, 2.0, 5.0, 4.0]
            .iter()
            .fold((0.0, 0), |(avg, count), rating| {
                rolling_average(avg, count, *rating)
            });

        assert_eq!(count, 5);
        assert!((1.0..=5.0).contains(&average));
        assert_eq!(average, 3.4);
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn rate_rejects_out_of_range_ratings() {
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection();

        let err = rate(&db, Id::new_v4(), 6.0).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Rating must be between 1 and 5".to_string())
        );
    }
}
