//! Site-wide numbers and recent activity for administrators.
use crate::error::Error;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use entity_api::{challenge, educational_content, fitness_plan_user, meal_plan_user, user};
use sea_orm::DatabaseConnection;
use serde::Serialize;

const ACTIVITY_PER_KIND: u64 = 5;
const MAX_ACTIVITIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub description: String,
    pub timestamp: DateTime<FixedOffset>,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub total_users: u64,
    pub active_plans: u64,
    pub ongoing_challenges: u64,
    pub recent_content: u64,
    pub recent_activities: Vec<Activity>,
}

/// Newest first, capped at ten entries.
pub fn merge_activities(groups: impl IntoIterator<Item = Vec<Activity>>) -> Vec<Activity> {
    let mut activities: Vec<Activity> = groups.into_iter().flatten().collect();
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities.truncate(MAX_ACTIVITIES);
    activities
}

async fn recent_activities(
    db: &DatabaseConnection,
    since: DateTime<FixedOffset>,
) -> Result<Vec<Activity>, Error> {
    let registrations = user::find_created_since(db, since, ACTIVITY_PER_KIND)
        .await?
        .into_iter()
        .map(|user| Activity {
            description: format!("New user registered: {}", user.email),
            timestamp: user.created_at,
            icon: "FaUserPlus",
        })
        .collect();

    let plan_joins = fitness_plan_user::find_joined_since(db, since, ACTIVITY_PER_KIND)
        .await?
        .into_iter()
        .map(|(participation, email, plan_name)| Activity {
            description: format!("{email} joined fitness plan: {plan_name}"),
            timestamp: participation.joined_at,
            icon: "FaCalendarAlt",
        })
        .collect();

    Ok(merge_activities([registrations, plan_joins]))
}

pub async fn summary(db: &DatabaseConnection) -> Result<Dashboard, Error> {
    let now = Utc::now();

    let total_users = user::count_all(db).await?;
    let active_plans =
        fitness_plan_user::count_all(db).await? + meal_plan_user::count_all(db).await?;
    let ongoing_challenges = challenge::count_active_on(db, now.date_naive()).await?;
    let recent_content =
        educational_content::count_uploaded_since(db, (now - Duration::days(30)).into()).await?;
    let recent_activities = recent_activities(db, (now - Duration::days(7)).into()).await?;

    Ok(Dashboard {
        total_users,
        active_plans,
        ongoing_challenges,
        recent_content,
        recent_activities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(minutes_ago: i64, icon: &'static str) -> Activity {
        Activity {
            description: format!("{minutes_ago} minutes ago"),
            timestamp: (Utc::now() - Duration::minutes(minutes_ago)).into(),
            icon,
        }
    }

    #[test]
    fn merge_activities_sorts_newest_first() {
        let registrations = vec![activity(30, "FaUserPlus"), activity(5, "FaUserPlus")];
        let joins = vec![activity(10, "FaCalendarAlt")];

        let merged = merge_activities([registrations, joins]);

        let order: Vec<&str> = merged.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(order, ["5 minutes ago", "10 minutes ago", "30 minutes ago"]);
    }

    #[test]
    fn merge_activities_keeps_at_most_ten() {
        let registrations = (0..5).map(|i| activity(i, "FaUserPlus")).collect();
        let joins = (5..11).map(|i| activity(i, "FaCalendarAlt")).collect();

        let merged = merge_activities([registrations, joins]);

        assert_eq!(merged.len(), 10);
        assert_eq!(merged[0].description, "0 minutes ago");
        assert_eq!(merged[9].description, "9 minutes ago");
    }
}
