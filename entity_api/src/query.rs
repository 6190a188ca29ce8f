//! Generic read helpers shared by every entity module.
use crate::error::Error;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Iterable, Order, QueryFilter, QueryOrder, Value,
};
use std::collections::HashMap;

/// `QueryFilterMap` carries filter parameters from a web request down to the database query
/// layer. Keys are column names, values are optional `sea_orm::Value`s.
///
/// # Example
///
/// ```
/// use sea_orm::Value;
/// use entity_api::QueryFilterMap;
///
/// let mut query_filter_map = QueryFilterMap::new();
/// query_filter_map.insert("meal_time".to_string(), Some(Value::String(Some(Box::new("lunch".to_string())))));
/// let filter_value = query_filter_map.get("meal_time");
/// ```
#[derive(Debug, Default)]
pub struct QueryFilterMap {
    map: HashMap<String, Option<Value>>,
}

impl QueryFilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        // HashMap.get returns an Option and so we need to "flatten" this to a single Option
        self.map
            .get(key)
            .and_then(|inner_option| inner_option.clone())
    }

    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }
}

/// Converts a params struct into a `QueryFilterMap`.
///
/// # Example
///
/// ```
/// use entity_api::QueryFilterMap;
/// use entity_api::IntoQueryFilterMap;
///
/// #[derive(Debug)]
/// struct MyParams {
///     meal_plan_id: String,
/// }
///
/// impl IntoQueryFilterMap for MyParams {
///     fn into_query_filter_map(self) -> QueryFilterMap {
///         let mut query_filter_map = QueryFilterMap::new();
///         query_filter_map.insert(
///             "meal_plan_id".to_string(),
///             Some(sea_orm::Value::String(Some(Box::new(self.meal_plan_id)))),
///         );
///         query_filter_map
///     }
/// }
/// ```
pub trait IntoQueryFilterMap {
    fn into_query_filter_map(self) -> QueryFilterMap;
}

/// Find all records of an entity by the given query filter map.
pub async fn find_by<E, C>(
    db: &DatabaseConnection,
    query_filter_map: QueryFilterMap,
) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait<Column = C>,
    C: ColumnTrait,
{
    find_by_ordered::<E, C>(db, query_filter_map, &[]).await
}

/// Same as [`find_by`] but sorts the results by each `(column, order)` pair in turn.
pub async fn find_by_ordered<E, C>(
    db: &DatabaseConnection,
    query_filter_map: QueryFilterMap,
    order_by: &[(C, Order)],
) -> Result<Vec<E::Model>, Error>
where
    E: EntityTrait<Column = C>,
    C: ColumnTrait,
{
    let mut query = E::find();

    // We iterate through the entity's defined columns so that we only attempt
    // to filter by columns that exist.
    for column in C::iter() {
        if let Some(value) = query_filter_map.get(&column.to_string()) {
            query = query.filter(column.eq(value));
        }
    }

    for (column, order) in order_by {
        query = query.order_by(*column, order.clone());
    }

    Ok(query.all(db).await?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use entity::{challenge_participants, Id};
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    #[tokio::test]
    async fn find_by_ordered_filters_on_known_columns_and_sorts() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<challenge_participants::Model>::new()])
            .into_connection();

        let user_id = Id::new_v4();
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert("user_id".to_string(), Some(user_id.into()));
        query_filter_map.insert("not_a_column".to_string(), Some(1.into()));

        find_by_ordered::<challenge_participants::Entity, challenge_participants::Column>(
            &db,
            query_filter_map,
            &[(challenge_participants::Column::DateJoined, Order::Desc)],
        )
        .await?;

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "challenge_participants"."id", "challenge_participants"."user_id", "challenge_participants"."challenge_id", "challenge_participants"."date_joined", "challenge_participants"."progress" FROM "fitlife"."challenge_participants" WHERE "challenge_participants"."user_id" = $1 ORDER BY "challenge_participants"."date_joined" DESC"#,
                [user_id.into()]
            )]
        );

        Ok(())
    }

    #[test]
    fn query_filter_map_get_flattens_missing_values() {
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert("day".to_string(), None);

        assert!(query_filter_map.get("day").is_none());
        assert!(query_filter_map.get("absent").is_none());
    }
}
