use chrono::NaiveDate;
use domain::{specialization::Specialization, user::RegistrationInput, IntoUpdateMap, UpdateMap};
use serde::Deserialize;
use utoipa::ToSchema;

use super::set;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<RegisterParams> for RegistrationInput {
    fn from(params: RegisterParams) -> Self {
        RegistrationInput {
            username: params.username,
            email: params.email,
            password: params.password,
            password2: params.password2,
            first_name: params.first_name,
            last_name: params.last_name,
        }
    }
}

/// Profile and instructor fields. Which ones a caller may change is decided in `domain`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[schema(value_type = Option<String>, format = Date)]
    pub birthday: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
    pub contact: Option<String>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    pub specialization: Option<Specialization>,
}

impl IntoUpdateMap for UpdateUserParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        set(&mut update_map, "email", self.email);
        set(&mut update_map, "username", self.username);
        set(&mut update_map, "first_name", self.first_name);
        set(&mut update_map, "last_name", self.last_name);
        set(&mut update_map, "age", self.age);
        set(&mut update_map, "height", self.height);
        set(&mut update_map, "weight", self.weight);
        set(&mut update_map, "birthday", self.birthday);
        set(&mut update_map, "profile_picture_url", self.profile_picture_url);
        set(&mut update_map, "contact", self.contact);
        set(&mut update_map, "experience", self.experience);
        set(&mut update_map, "bio", self.bio);
        set(&mut update_map, "specialization", self.specialization);
        update_map
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PasswordParams {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
