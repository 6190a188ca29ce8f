//! `SeaORM` Entity for the users table.
//!
//! Regular members, instructors (`is_instructor = true`) and admins all live
//! in this table.

use crate::roles::Role;
use crate::specialization::Specialization;
use crate::Id;
use axum_login::AuthUser;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::users::Model)]
#[sea_orm(schema_name = "fitlife", table_name = "users")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub age: Option<i32>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    #[schema(value_type = Option<String>, format = Date)]
    pub birthday: Option<Date>,
    pub profile_picture_url: Option<String>,
    #[serde(skip_deserializing)]
    pub role: Role,
    #[serde(default)]
    pub is_instructor: bool,
    #[sea_orm(unique)]
    pub contact: Option<String>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    pub specialization: Option<Specialization>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::challenge_participants::Entity")]
    ChallengeParticipants,
    #[sea_orm(has_many = "super::fitness_plan_users::Entity")]
    FitnessPlanUsers,
    #[sea_orm(has_many = "super::meal_plan_users::Entity")]
    MealPlanUsers,
    #[sea_orm(has_one = "super::goals::Entity")]
    Goals,
}

impl Related<super::challenge_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChallengeParticipants.def()
    }
}

impl Related<super::fitness_plan_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessPlanUsers.def()
    }
}

impl Related<super::meal_plan_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlanUsers.def()
    }
}

impl Related<super::goals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl AuthUser for Model {
    type Id = Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    // Changing the password hash invalidates every existing session.
    fn session_auth_hash(&self) -> &[u8] {
        self.password.as_bytes()
    }
}
