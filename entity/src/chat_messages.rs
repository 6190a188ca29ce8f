//! `SeaORM` Entity for the chat_messages table.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::chat_messages::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "chat_messages")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[serde(skip_deserializing)]
    pub sender_id: Id,
    #[schema(value_type = Uuid)]
    pub recipient_id: Id,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SenderId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Senders,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecipientId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recipients,
}

impl ActiveModelBehavior for ActiveModel {}
