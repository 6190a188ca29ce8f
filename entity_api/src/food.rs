use super::error::Error;
use entity::foods::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, food_model: Model) -> Result<Model, Error> {
    debug!("New Food Model to be inserted: {food_model:?}");

    let active_model = ActiveModel {
        name: Set(food_model.name),
        description: Set(food_model.description),
        image_url: Set(food_model.image_url),
        carbs: Set(food_model.carbs),
        protein: Set(food_model.protein),
        fat: Set(food_model.fat),
        food_type: Set(food_model.food_type),
        created_at: Set(chrono::Utc::now().into()),
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

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().order_by_asc(Column::Name).all(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let food = find_by_id(db, id).await?;
    food.delete(db).await?;
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use entity::food_type::FoodType;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_returns_the_inserted_food() -> Result<(), Error> {
        let food_model = Model {
            id: Id::new_v4(),
            name: "Banana".to_owned(),
            description: None,
            image_url: None,
            carbs: Some(23.0),
            protein: 1.1,
            fat: 0.3,
            food_type: FoodType::Fruit,
            created_at: chrono::Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[food_model.clone()]])
            .into_connection();

        let food = create(&db, food_model.clone()).await?;

        assert_eq!(food.id, food_model.id);
        assert_eq!(food.food_type, FoodType::Fruit);

        Ok(())
    }
}
