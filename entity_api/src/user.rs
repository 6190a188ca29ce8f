use super::error::{EntityApiErrorKind, Error};
use async_trait::async_trait;
use axum_login::{AuthnBackend, UserId};
use chrono::Utc;

use entity::roles::Role;
use entity::specialization::Specialization;
use entity::users::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;
use password_auth;
use sea_orm::{
    entity::prelude::*, ConnectionTrait, DatabaseConnection, IntoActiveModel, QueryOrder,
    QuerySelect, Set, TryIntoModel,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

pub async fn create(db: &impl ConnectionTrait, user_model: Model) -> Result<Model, Error> {
    debug!(
        "New User Model to be inserted with email: {}",
        user_model.email
    );

    let now = Utc::now();
    let user_active_model: ActiveModel = ActiveModel {
        email: Set(user_model.email),
        username: Set(user_model.username),
        first_name: Set(user_model.first_name),
        last_name: Set(user_model.last_name),
        password: Set(generate_hash(user_model.password)),
        age: Set(user_model.age),
        height: Set(user_model.height),
        weight: Set(user_model.weight),
        birthday: Set(user_model.birthday),
        profile_picture_url: Set(user_model.profile_picture_url),
        role: Set(user_model.role),
        is_instructor: Set(user_model.is_instructor),
        contact: Set(user_model.contact),
        experience: Set(user_model.experience),
        bio: Set(user_model.bio),
        specialization: Set(user_model.specialization),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(user_active_model.insert(db).await?)
}

pub async fn find_by_email(db: &impl ConnectionTrait, email: &str) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn find_by_username(
    db: &impl ConnectionTrait,
    username: &str,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?)
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_by_ids(db: &DatabaseConnection, ids: Vec<Id>) -> Result<Vec<Model>, Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    Ok(Entity::find()
        .filter(Column::Id.is_in(ids))
        .order_by_asc(Column::Username)
        .all(db)
        .await?)
}

/// Members that are neither admins nor instructors.
pub async fn find_regular_users(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::Role.eq(Role::User))
        .filter(Column::IsInstructor.eq(false))
        .order_by_asc(Column::Username)
        .all(db)
        .await?)
}

pub async fn find_instructors(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::IsInstructor.eq(true))
        .order_by_asc(Column::Username)
        .all(db)
        .await?)
}

pub async fn find_instructors_by_specialization(
    db: &DatabaseConnection,
    specialization: Specialization,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::IsInstructor.eq(true))
        .filter(Column::Specialization.eq(specialization))
        .all(db)
        .await?)
}

pub async fn count_all(db: &DatabaseConnection) -> Result<u64, Error> {
    Ok(Entity::find().count(db).await?)
}

/// Accounts created at or after `since`, newest first.
pub async fn find_created_since(
    db: &DatabaseConnection,
    since: DateTimeWithTimeZone,
    limit: u64,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::CreatedAt.gte(since))
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?)
}

/// Stores a new password hash. Every session of the user is invalidated because the
/// session auth hash is derived from the password hash.
pub async fn update_password(
    db: &DatabaseConnection,
    user: Model,
    new_password: String,
) -> Result<Model, Error> {
    let mut active_model = user.into_active_model();
    active_model.password = Set(generate_hash(new_password));
    active_model.updated_at = Set(Utc::now().into());
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn update_body_metrics(
    db: &impl ConnectionTrait,
    user: Model,
    age: Option<i32>,
    height: Option<f64>,
    weight: Option<f64>,
) -> Result<Model, Error> {
    let mut active_model = user.into_active_model();
    if let Some(age) = age {
        active_model.age = Set(Some(age));
    }
    if let Some(height) = height {
        active_model.height = Set(Some(height));
    }
    if let Some(weight) = weight {
        active_model.weight = Set(Some(weight));
    }
    active_model.updated_at = Set(Utc::now().into());
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete(db: &impl ConnectionTrait, user_id: Id) -> Result<(), Error> {
    Entity::delete_by_id(user_id).exec(db).await?;
    Ok(())
}

pub async fn verify_password(password_to_verify: &str, password_hash: &str) -> Result<(), Error> {
    match password_auth::verify_password(password_to_verify, password_hash) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordUnauthenticated,
        }),
    }
}

pub fn generate_hash(password: String) -> String {
    password_auth::generate_hash(password)
}

#[derive(Debug, Clone)]
pub struct Backend {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, Clone, ToSchema, IntoParams, Deserialize)]
#[schema(as = domain::user::Credentials)] // OpenAPI schema
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub next: Option<String>,
}

impl Backend {
    pub fn new(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            // Arc is cloned, but the source DatabaseConnection refers to the same instance
            // as the one passed in to new() (see the Arc documentation for more info)
            db: Arc::clone(db),
        }
    }
}

#[async_trait]
impl AuthnBackend for Backend {
    type User = Model;
    type Credentials = Credentials;
    type Error = Error;

    // An unknown email or a wrong password both yield Ok(None) so that the login
    // handler answers 401 without revealing which one failed.
    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        let user = find_by_email(self.db.as_ref(), &creds.email).await?;
        Ok(user.filter(|user| {
            password_auth::verify_password(&creds.password, &user.password).is_ok()
        }))
    }

    async fn get_user(&self, user_id: &UserId<Self>) -> Result<Option<Self::User>, Self::Error> {
        Ok(Entity::find_by_id(*user_id).one(self.db.as_ref()).await?)
    }
}

pub type AuthSession = axum_login::AuthSession<Backend>;

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    pub(crate) fn user_model(email: &str, password: &str) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            email: email.to_owned(),
            username: "jdoe".to_owned(),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            password: password.to_owned(),
            age: Some(30),
            height: Some(170.0),
            weight: Some(65.0),
            birthday: None,
            profile_picture_url: None,
            role: Role::User,
            is_instructor: false,
            contact: None,
            experience: None,
            bio: None,
            specialization: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn delete_deletes_a_user() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let user_id = Id::new_v4();
        let _ = delete(&db, user_id).await;

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "fitlife"."users" WHERE "users"."id" = $1"#,
                [user_id.into()]
            )]
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_by_ids_skips_the_query_for_no_ids() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let users = find_by_ids(&db, Vec::new()).await?;

        assert!(users.is_empty());
        assert!(db.into_transaction_log().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_hashes_the_password() -> Result<(), Error> {
        let stored = user_model("jane@fitlife.app", "hashed");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .into_connection();

        let user = create(&db, user_model("jane@fitlife.app", "secret-password")).await?;

        assert_eq!(user.email, stored.email);
        assert_ne!(user.password, "secret-password");

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_returns_none_for_a_wrong_password() -> Result<(), Error> {
        let stored = user_model("jane@fitlife.app", &generate_hash("right-password".to_owned()));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored]])
            .into_connection();
        let backend = Backend::new(&Arc::new(db));

        let user = backend
            .authenticate(Credentials {
                email: "jane@fitlife.app".to_owned(),
                password: "wrong-password".to_owned(),
                next: None,
            })
            .await?;

        assert!(user.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_returns_the_user_for_the_right_password() -> Result<(), Error> {
        let stored = user_model("jane@fitlife.app", &generate_hash("right-password".to_owned()));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .into_connection();
        let backend = Backend::new(&Arc::new(db));

        let user = backend
            .authenticate(Credentials {
                email: "jane@fitlife.app".to_owned(),
                password: "right-password".to_owned(),
                next: None,
            })
            .await?;

        assert_eq!(user.map(|user| user.id), Some(stored.id));

        Ok(())
    }
}
