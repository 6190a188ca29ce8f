use domain::Id;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    #[param(value_type = Option<Uuid>)]
    pub(crate) other_user: Option<Id>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendParams {
    #[schema(value_type = Option<Uuid>)]
    pub recipient_id: Option<Id>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplyParams {
    #[serde(default)]
    pub message: String,
}
