use crate::error::Error;
use crate::roles::Role;
use crate::users::{self, ActiveModel, Column, Model};
use crate::Id;
use email_address::EmailAddress;
use entity_api::{mutate, user, IntoUpdateMap};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel};
use std::str::FromStr;

pub use entity_api::user::{
    find_by_email, find_by_id, find_by_ids, find_regular_users, AuthSession, Backend, Credentials,
};

const MIN_PASSWORD_LEN: usize = 8;

/// Sign up form fields. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, Error> {
    match value.map(|value| value.trim().to_owned()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::validation(format!("{field} is required."))),
    }
}

pub fn validate_password(password: &str) -> Result<(), Error> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::validation(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::validation("This password is entirely numeric."));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), Error> {
    EmailAddress::from_str(email)
        .map(|_| ())
        .map_err(|_| Error::validation("Enter a valid email address."))
}

/// Checks the form and returns the user model to insert. The password is still in
/// plain text here and is hashed on insert.
pub fn validate_registration(input: RegistrationInput) -> Result<Model, Error> {
    let username = required(input.username, "username")?;
    let email = required(input.email, "email")?;
    let password = input
        .password
        .filter(|password| !password.is_empty())
        .ok_or_else(|| Error::validation("password is required."))?;
    let password2 = input
        .password2
        .filter(|password| !password.is_empty())
        .ok_or_else(|| Error::validation("password2 is required."))?;
    let first_name = required(input.first_name, "first_name")?;
    let last_name = required(input.last_name, "last_name")?;

    if password != password2 {
        return Err(Error::validation("Password fields didn't match."));
    }
    validate_password(&password)?;
    validate_email(&email)?;

    let now = chrono::Utc::now();
    Ok(Model {
        id: Id::nil(),
        email,
        username,
        first_name,
        last_name,
        password,
        age: None,
        height: None,
        weight: None,
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
    })
}

async fn ensure_unique(db: &DatabaseConnection, email: &str, username: &str) -> Result<(), Error> {
    if user::find_by_email(db, email).await?.is_some() {
        return Err(Error::validation("A user with that email already exists."));
    }
    if user::find_by_username(db, username).await?.is_some() {
        return Err(Error::validation("A user with that username already exists."));
    }
    Ok(())
}

pub async fn register(db: &DatabaseConnection, input: RegistrationInput) -> Result<Model, Error> {
    let user_model = validate_registration(input)?;
    ensure_unique(db, &user_model.email, &user_model.username).await?;

    let user = user::create(db, user_model).await?;
    info!("Registered user {} ({})", user.id, user.email);
    Ok(user)
}

/// Inserts a fully specified user, as admins do when adding instructors.
pub async fn create(db: &DatabaseConnection, user_model: Model) -> Result<Model, Error> {
    validate_password(&user_model.password)?;
    validate_email(&user_model.email)?;
    ensure_unique(db, &user_model.email, &user_model.username).await?;
    Ok(user::create(db, user_model).await?)
}

fn validate_profile(user: &Model) -> Result<(), Error> {
    if user.username.trim().is_empty() {
        return Err(Error::validation("username is required."));
    }
    validate_email(&user.email)?;
    if user.age.is_some_and(|age| age <= 0)
        || user.height.is_some_and(|height| height <= 0.0)
        || user.weight.is_some_and(|weight| weight <= 0.0)
    {
        return Err(Error::validation(
            "Age, height and weight must be positive.",
        ));
    }
    Ok(())
}

/// Partial update of a user's own profile.
pub async fn update_profile(
    db: &DatabaseConnection,
    user_id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, user_id).await?;
    let mut update_map = params.into_update_map();
    // Credentials and privileges change elsewhere.
    for column in ["password", "role", "is_instructor"] {
        update_map.remove(column);
    }
    update_map.touch();

    let active_model =
        mutate::apply::<ActiveModel, Column>(existing.into_active_model(), &update_map);
    validate_profile(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    user_id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, user_id).await?;
    let mut update_map = params.into_update_map();
    update_map.remove("password");
    update_map.touch();

    let active_model =
        mutate::apply::<ActiveModel, Column>(existing.into_active_model(), &update_map);
    validate_profile(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

pub async fn change_password(
    db: &DatabaseConnection,
    user: Model,
    current_password: &str,
    new_password: String,
    confirm_password: &str,
) -> Result<Model, Error> {
    if user::verify_password(current_password, &user.password)
        .await
        .is_err()
    {
        return Err(Error::validation("Current password is incorrect."));
    }
    if new_password != confirm_password {
        return Err(Error::validation("Password fields didn't match."));
    }
    validate_password(&new_password)?;

    let user = user::update_password(db, user, new_password).await?;
    info!("User {} changed their password", user.id);
    Ok(user)
}

pub async fn delete(db: &DatabaseConnection, user_id: Id) -> Result<(), Error> {
    Ok(user::delete(db, user_id).await?)
}

pub async fn count_all(db: &DatabaseConnection) -> Result<u64, Error> {
    Ok(user::count_all(db).await?)
}

pub async fn find_created_since(
    db: &DatabaseConnection,
    since: chrono::DateTime<chrono::FixedOffset>,
    limit: u64,
) -> Result<Vec<users::Model>, Error> {
    Ok(user::find_created_since(db, since, limit).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;

    fn input() -> RegistrationInput {
        RegistrationInput {
            username: Some("jordan".to_owned()),
            email: Some("jordan@fitlife.test".to_owned()),
            password: Some("s3cure-pass".to_owned()),
            password2: Some("s3cure-pass".to_owned()),
            first_name: Some("Jordan".to_owned()),
            last_name: Some("Reyes".to_owned()),
        }
    }

    fn validation_message(err: Error) -> String {
        match err.error_kind {
            DomainErrorKind::Validation(message) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_registration_accepts_a_complete_form() {
        let user = validate_registration(input()).unwrap();

        assert_eq!(user.email, "jordan@fitlife.test");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_instructor);
    }

    #[test]
    fn validate_registration_rejects_mismatched_passwords() {
        let form = RegistrationInput {
            password2: Some("different-pass".to_owned()),
            ..input()
        };

        assert_eq!(
            validation_message(validate_registration(form).unwrap_err()),
            "Password fields didn't match."
        );
    }

    #[test]
    fn validate_registration_requires_every_field() {
        let form = RegistrationInput {
            last_name: Some("  ".to_owned()),
            ..input()
        };

        assert_eq!(
            validation_message(validate_registration(form).unwrap_err()),
            "last_name is required."
        );
    }

    #[test]
    fn validate_password_rejects_short_and_numeric_passwords() {
        assert!(validate_password("abc123").is_err());
        assert_eq!(
            validation_message(validate_password("12345678901").unwrap_err()),
            "This password is entirely numeric."
        );
        assert!(validate_password("abcd1234").is_ok());
    }

    #[test]
    fn validate_registration_rejects_a_malformed_email() {
        let form = RegistrationInput {
            email: Some("not-an-email".to_owned()),
            ..input()
        };

        assert_eq!(
            validation_message(validate_registration(form).unwrap_err()),
            "Enter a valid email address."
        );
    }
}
