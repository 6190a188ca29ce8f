//! This module holds typed parameters for various endpoint inputs.
//!
//! Query strings and request bodies are deserialized into these structs so that every
//! input is validated by type before it reaches the `domain` layer. Partial update
//! bodies implement [`domain::IntoUpdateMap`] and list filters implement
//! [`domain::IntoQueryFilterMap`].

use domain::UpdateMap;
use sea_orm::Value;
use serde::Deserialize;
use utoipa::ToSchema;

pub(crate) mod challenge;
pub(crate) mod chat;
pub(crate) mod content;
pub(crate) mod exercise;
pub(crate) mod fitness_plan;
pub(crate) mod food;
pub(crate) mod goal;
pub(crate) mod meal_plan;
pub(crate) mod subscription;
pub(crate) mod user;

/// Marks one day of a joined challenge or plan as done.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TickDayParams {
    pub day: i32,
}

/// Stores `value` under `column` when it was supplied.
pub(crate) fn set<V: Into<Value>>(update_map: &mut UpdateMap, column: &str, value: Option<V>) {
    if let Some(value) = value {
        update_map.insert(column.to_string(), Some(value.into()));
    }
}
