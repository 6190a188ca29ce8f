use crate::chat_messages::Model;
use crate::error::Error;
use crate::users::Model as UserModel;
use crate::Id;
use entity_api::{chat_message, user};
use log::*;
use sea_orm::DatabaseConnection;
use std::collections::BTreeSet;

/// With `other_user` the thread between the two users, otherwise everything
/// `user_id` sent or received. Oldest first either way.
pub async fn find_messages(
    db: &DatabaseConnection,
    user_id: Id,
    other_user: Option<Id>,
) -> Result<Vec<Model>, Error> {
    Ok(match other_user {
        Some(other_user_id) => chat_message::find_thread(db, user_id, other_user_id).await?,
        None => chat_message::find_for_user(db, user_id).await?,
    })
}

pub async fn send(
    db: &DatabaseConnection,
    sender_id: Id,
    recipient_id: Option<Id>,
    message: String,
) -> Result<Model, Error> {
    let recipient_id = recipient_id.ok_or_else(|| Error::validation("recipient_id is required"))?;
    let recipient = user::find_by_id(db, recipient_id)
        .await
        .map_err(Error::missing_as_validation("Recipient not found"))?;
    if recipient.id == sender_id {
        return Err(Error::validation("Cannot send message to yourself"));
    }
    if message.trim().is_empty() {
        return Err(Error::validation("message may not be blank."));
    }

    let sent = chat_message::create(db, sender_id, recipient.id, message).await?;
    debug!("Message {} sent from {sender_id} to {}", sent.id, recipient.id);
    Ok(sent)
}

/// Only the recipient can mark a message as read.
pub async fn mark_read(db: &DatabaseConnection, user_id: Id, id: Id) -> Result<Model, Error> {
    let message = chat_message::find_by_id(db, id).await?;
    if message.recipient_id != user_id {
        return Err(Error::forbidden(
            "Only the recipient can mark a message as read",
        ));
    }
    if message.is_read {
        return Ok(message);
    }
    Ok(chat_message::mark_read(db, message).await?)
}

/// Everyone `user_id` has exchanged at least one message with.
pub fn conversation_partners(user_id: Id, messages: &[Model]) -> Vec<Id> {
    messages
        .iter()
        .map(|message| {
            if message.sender_id == user_id {
                message.recipient_id
            } else {
                message.sender_id
            }
        })
        .filter(|partner| *partner != user_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub async fn conversations(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Vec<UserModel>, Error> {
    let messages = chat_message::find_for_user(db, user_id).await?;
    Ok(user::find_by_ids(db, conversation_partners(user_id, &messages)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender_id: Id, recipient_id: Id) -> Model {
        Model {
            id: Id::new_v4(),
            sender_id,
            recipient_id,
            message: "See you at 6".to_owned(),
            timestamp: chrono::Utc::now().into(),
            is_read: false,
        }
    }

    #[test]
    fn conversation_partners_are_distinct() {
        let me = Id::new_v4();
        let coach = Id::new_v4();
        let friend = Id::new_v4();
        let messages = vec![
            message(me, coach),
            message(coach, me),
            message(friend, me),
            message(me, coach),
        ];

        let mut expected = vec![coach, friend];
        expected.sort();

        assert_eq!(conversation_partners(me, &messages), expected);
    }

    #[test]
    fn conversation_partners_is_empty_without_messages() {
        assert!(conversation_partners(Id::new_v4(), &[]).is_empty());
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn send_requires_a_recipient() {
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres).into_connection();

        let err = send(&db, Id::new_v4(), None, "hi".to_owned())
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            crate::error::DomainErrorKind::Validation("recipient_id is required".to_string())
        );
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn mark_read_is_forbidden_for_the_sender() {
        let sender = Id::new_v4();
        let sent = message(sender, Id::new_v4());
        let db = sea_orm::MockDatabase::new(sea_orm::DatabaseBackend::Postgres)
            .append_query_results([[sent.clone()]])
            .into_connection();

        let err = mark_read(&db, sender, sent.id).await.unwrap_err();

        assert!(matches!(
            err.error_kind,
            crate::error::DomainErrorKind::Forbidden(_)
        ));
    }
}
