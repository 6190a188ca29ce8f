//! Trainers and nutritionists, and the clients assigned to them through premium
//! subscriptions.
use crate::error::Error;
use crate::goals::Model as GoalModel;
use crate::users::Model;
use crate::Id;
use entity_api::{goal, subscription, user, IntoUpdateMap};
use log::*;
use sea_orm::DatabaseConnection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<Model> for ClientSummary {
    fn from(user: Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            age: user.age,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructorSummary {
    #[serde(flatten)]
    pub instructor: Model,
    pub assigned_clients_count: usize,
    pub clients: Vec<ClientSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientDetail {
    #[serde(flatten)]
    pub client: Model,
    pub goal: Option<GoalModel>,
}

async fn find_clients(db: &DatabaseConnection, instructor_id: Id) -> Result<Vec<Model>, Error> {
    let client_ids = subscription::find_by_instructor(db, instructor_id)
        .await?
        .into_iter()
        .map(|subscription| subscription.user_id)
        .collect();
    Ok(user::find_by_ids(db, client_ids).await?)
}

async fn summarize(db: &DatabaseConnection, instructor: Model) -> Result<InstructorSummary, Error> {
    let clients: Vec<ClientSummary> = find_clients(db, instructor.id)
        .await?
        .into_iter()
        .map(ClientSummary::from)
        .collect();

    Ok(InstructorSummary {
        instructor,
        assigned_clients_count: clients.len(),
        clients,
    })
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<InstructorSummary>, Error> {
    let instructors = user::find_instructors(db).await?;
    let mut summaries = Vec::with_capacity(instructors.len());
    for instructor in instructors {
        summaries.push(summarize(db, instructor).await?);
    }
    Ok(summaries)
}

async fn find_instructor(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    let instructor = user::find_by_id(db, id).await?;
    if !instructor.is_instructor {
        return Err(Error::not_found("Instructor not found"));
    }
    Ok(instructor)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<InstructorSummary, Error> {
    let instructor = find_instructor(db, id).await?;
    summarize(db, instructor).await
}

pub async fn create(db: &DatabaseConnection, instructor: Model) -> Result<InstructorSummary, Error> {
    if instructor.specialization.is_none() {
        return Err(Error::validation(
            "Instructors need a specialization.",
        ));
    }
    let instructor = crate::user::create(
        db,
        Model {
            is_instructor: true,
            ..instructor
        },
    )
    .await?;
    info!("Created instructor {} ({})", instructor.id, instructor.email);

    Ok(InstructorSummary {
        instructor,
        assigned_clients_count: 0,
        clients: Vec::new(),
    })
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<InstructorSummary, Error> {
    find_instructor(db, id).await?;
    let instructor = crate::user::update(db, id, params).await?;
    summarize(db, instructor).await
}

pub async fn delete(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    find_instructor(db, id).await?;
    user::delete(db, id).await?;
    info!("Deleted instructor {id}");
    Ok(())
}

/// The signed-in instructor with every client subscribed to them.
pub async fn dashboard(db: &DatabaseConnection, user: Model) -> Result<InstructorSummary, Error> {
    if !user.is_instructor {
        warn!("User {} requested the instructor dashboard", user.id);
        return Err(Error::forbidden("Only instructors can access this dashboard"));
    }
    summarize(db, user).await
}

pub async fn client_details(
    db: &DatabaseConnection,
    instructor: &Model,
    client_id: Id,
) -> Result<ClientDetail, Error> {
    if !instructor.is_instructor {
        return Err(Error::forbidden("Only instructors can access client details"));
    }

    let assigned = subscription::find_by_instructor(db, instructor.id)
        .await?
        .iter()
        .any(|subscription| subscription.user_id == client_id);
    if !assigned {
        return Err(Error::not_found("Client not found or not assigned to you"));
    }

    let client = user::find_by_id(db, client_id).await?;
    let goal = goal::find_by_user(db, client_id).await?;
    Ok(ClientDetail { client, goal })
}

/// The trainer and nutritionist on `user_id`'s subscription, if any.
pub async fn assigned_to(db: &DatabaseConnection, user_id: Id) -> Result<Vec<Model>, Error> {
    let Some(subscription) = subscription::find_by_user(db, user_id).await? else {
        return Ok(Vec::new());
    };

    let ids = [subscription.trainer_id, subscription.nutritionist_id]
        .into_iter()
        .flatten()
        .collect();
    Ok(user::find_by_ids(db, ids).await?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;
    use entity_api::{
        roles::Role, specialization::Specialization, subscription_tier::SubscriptionTier,
        subscriptions,
    };
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user(username: &str, is_instructor: bool) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: Id::new_v4(),
            email: format!("{username}@fitlife.test"),
            username: username.to_owned(),
            first_name: username.to_owned(),
            last_name: "Test".to_owned(),
            password: "hash".to_owned(),
            age: Some(31),
            height: None,
            weight: None,
            birthday: None,
            profile_picture_url: None,
            role: Role::User,
            is_instructor,
            contact: None,
            experience: None,
            bio: None,
            specialization: is_instructor.then_some(Specialization::Trainer),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn subscription_for(client: &Model, trainer: &Model) -> subscriptions::Model {
        let now = chrono::Utc::now();
        subscriptions::Model {
            id: Id::new_v4(),
            user_id: client.id,
            plan: SubscriptionTier::Premium,
            is_active: true,
            start_date: now.into(),
            end_date: Some((now + chrono::Duration::days(30)).into()),
            trainer_id: Some(trainer.id),
            nutritionist_id: None,
        }
    }

    #[tokio::test]
    async fn dashboard_is_forbidden_for_members() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = dashboard(&db, user("member", false)).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Forbidden("Only instructors can access this dashboard".to_string())
        );
    }

    #[tokio::test]
    async fn dashboard_lists_subscribed_clients() -> Result<(), Error> {
        let trainer = user("coach", true);
        let client = user("client", false);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[subscription_for(&client, &trainer)]])
            .append_query_results([[client.clone()]])
            .into_connection();

        let summary = dashboard(&db, trainer).await?;

        assert_eq!(summary.assigned_clients_count, 1);
        assert_eq!(summary.clients, vec![ClientSummary::from(client)]);
        Ok(())
    }

    #[tokio::test]
    async fn client_details_hides_unassigned_clients() {
        let other_trainer = user("other", true);
        let client = user("client", false);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<subscriptions::Model>::new()])
            .into_connection();

        let err = client_details(&db, &other_trainer, client.id)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::NotFound("Client not found or not assigned to you".to_string())
        );
    }
}
