use domain::subscription_tier::SubscriptionTier;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeParams {
    pub plan: Option<SubscriptionTier>,
}
