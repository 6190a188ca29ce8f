use domain::users::Model as UserModel;
use domain::Id;
use serde::Serialize;
use utoipa::ToSchema;

/// The identity the client keeps after logging in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    #[schema(value_type = Uuid)]
    pub id: Id,
    pub email: String,
    pub username: String,
    pub is_instructor: bool,
    pub is_superuser: bool,
}

impl From<&UserModel> for SessionUser {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            is_instructor: user.is_instructor,
            is_superuser: user.is_admin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(value_type = Uuid)]
    pub id: Id,
    pub username: String,
    pub email: String,
    pub message: &'static str,
}

impl From<UserModel> for RegisteredUser {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            message: "User registered successfully",
        }
    }
}
