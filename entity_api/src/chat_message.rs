use super::error::Error;
use entity::chat_messages::{ActiveModel, Column, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, Condition, DatabaseConnection, IntoActiveModel,
    QueryOrder, TryIntoModel,
};

use log::*;

pub async fn create(
    db: &DatabaseConnection,
    sender_id: Id,
    recipient_id: Id,
    message: String,
) -> Result<Model, Error> {
    debug!("New chat message from {sender_id} to {recipient_id}");

    let active_model = ActiveModel {
        sender_id: Set(sender_id),
        recipient_id: Set(recipient_id),
        message: Set(message),
        timestamp: Set(chrono::Utc::now().into()),
        is_read: Set(false),
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

fn involving(user_id: Id) -> Condition {
    Condition::any()
        .add(Column::SenderId.eq(user_id))
        .add(Column::RecipientId.eq(user_id))
}

/// Every message sent or received by `user_id`, oldest first.
pub async fn find_for_user(db: &DatabaseConnection, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(involving(user_id))
        .order_by_asc(Column::Timestamp)
        .all(db)
        .await?)
}

/// The conversation between two users in both directions, oldest first.
pub async fn find_thread(
    db: &DatabaseConnection,
    user_id: Id,
    other_user_id: Id,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(Column::SenderId.eq(user_id))
                        .add(Column::RecipientId.eq(other_user_id)),
                )
                .add(
                    Condition::all()
                        .add(Column::SenderId.eq(other_user_id))
                        .add(Column::RecipientId.eq(user_id)),
                ),
        )
        .order_by_asc(Column::Timestamp)
        .all(db)
        .await?)
}

pub async fn mark_read(db: &DatabaseConnection, message: Model) -> Result<Model, Error> {
    let mut active_model = message.into_active_model();
    active_model.is_read = Set(true);
    Ok(active_model.update(db).await?.try_into_model()?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    #[tokio::test]
    async fn find_thread_matches_both_directions() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let me = Id::new_v4();
        let other = Id::new_v4();
        find_thread(&db, me, other).await?;

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "chat_messages"."id", "chat_messages"."sender_id", "chat_messages"."recipient_id", "chat_messages"."message", "chat_messages"."timestamp", "chat_messages"."is_read" FROM "fitlife"."chat_messages" WHERE ("chat_messages"."sender_id" = $1 AND "chat_messages"."recipient_id" = $2) OR ("chat_messages"."sender_id" = $3 AND "chat_messages"."recipient_id" = $4) ORDER BY "chat_messages"."timestamp" ASC"#,
                [me.into(), other.into(), other.into(), me.into()]
            )]
        );

        Ok(())
    }
}
