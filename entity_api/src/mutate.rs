//! Generic partial update helper.
use crate::error::Error;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, TryIntoModel, Value,
};
use std::collections::HashMap;

/// Applies every entry of `update_map` whose key names a column of `A::Entity` to
/// `active_model` and persists it. Keys that do not name a column are ignored, so a
/// params struct can never write to a column the entity does not have.
pub async fn update<A, C>(
    db: &DatabaseConnection,
    active_model: A,
    update_map: UpdateMap,
) -> Result<<A::Entity as EntityTrait>::Model, Error>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    C: ColumnTrait,
    A::Entity: EntityTrait<Column = C>,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    save(db, apply::<A, C>(active_model, &update_map)).await
}

/// Same as [`update`] without touching the database, so the merged record can be
/// checked before it is saved.
pub fn apply<A, C>(mut active_model: A, update_map: &UpdateMap) -> A
where
    A: ActiveModelTrait,
    C: ColumnTrait,
    A::Entity: EntityTrait<Column = C>,
{
    for column in C::iter() {
        if let Some(value) = update_map.get(&column.to_string()) {
            active_model.set(column, value.clone());
        }
    }
    active_model
}

/// The model `active_model` would persist as.
pub fn preview<A>(active_model: &A) -> Result<<A::Entity as EntityTrait>::Model, Error>
where
    A: ActiveModelTrait + Clone + TryIntoModel<<A::Entity as EntityTrait>::Model>,
{
    Ok(active_model.clone().try_into_model()?)
}

pub async fn save<A>(
    db: &DatabaseConnection,
    active_model: A,
) -> Result<<A::Entity as EntityTrait>::Model, Error>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    Ok(active_model.update(db).await?)
}

/// Column name to new value pairs for a partial update. A `None` value means the
/// field was not supplied and is skipped.
#[derive(Debug, Default)]
pub struct UpdateMap {
    map: HashMap<String, Option<Value>>,
}

impl UpdateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).and_then(|opt| opt.as_ref())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key).and_then(|opt| opt)
    }

    /// Overwrites any existing value for `key`.
    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }

    /// Sets `updated_at` to now. Entities without that column ignore it.
    pub fn touch(&mut self) {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
        self.insert("updated_at".to_string(), Some(Value::from(now)));
    }

    pub fn is_empty(&self) -> bool {
        self.map.values().all(Option::is_none)
    }
}

pub trait IntoUpdateMap {
    fn into_update_map(self) -> UpdateMap;
}

impl IntoUpdateMap for UpdateMap {
    fn into_update_map(self) -> UpdateMap {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_skips_unsupplied_fields() {
        let mut update_map = UpdateMap::new();
        update_map.insert("name".to_string(), Some(Value::from("Oats".to_string())));
        update_map.insert("description".to_string(), None);

        assert!(update_map.get("name").is_some());
        assert!(update_map.get("description").is_none());
        assert!(!update_map.is_empty());
    }

    #[test]
    fn is_empty_when_every_field_is_unsupplied() {
        let mut update_map = UpdateMap::new();
        update_map.insert("bio".to_string(), None);

        assert!(update_map.is_empty());
    }

    #[test]
    fn touch_sets_updated_at() {
        let mut update_map = UpdateMap::new();
        update_map.touch();

        assert!(update_map.get("updated_at").is_some());
    }

    #[test]
    fn remove_returns_the_supplied_value() {
        let mut update_map = UpdateMap::new();
        update_map.insert("weight".to_string(), Some(Value::from(72.5)));

        assert_eq!(update_map.remove("weight"), Some(Value::from(72.5)));
        assert!(update_map.get("weight").is_none());
    }
}
