//! Authorization middleware for routes that only some users may reach.
//!
//! Each rule is a [`Check`]. Route groups combine rules into [`Predicate`]s and run them
//! through [`authorize`], which answers 403 on the first rule that fails. Ownership of
//! participations, subscriptions and messages is checked in the `domain` layer instead,
//! because those checks need the stored record.

use crate::extractors::authenticated_user::AuthenticatedUser;
use crate::AppState;
use axum::{
    async_trait,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::IntoResponse,
};
use domain::{users, Id};
use log::*;

/// A single authorization rule.
///
/// The rule receives the shared application state, the authenticated
/// [`domain::users::Model`] and any additional [`Id`] arguments supplied by the caller.
#[async_trait]
pub trait Check: Send + Sync {
    async fn eval(&self, app: &AppState, user: &users::Model, args: Vec<Id>) -> bool;
}

/// Pairs a [`Check`] with the arguments it is evaluated with.
pub(crate) struct Predicate {
    predicate: Box<dyn Check>,
    args: Vec<Id>,
}

impl Predicate {
    pub(crate) fn new<C: Check + 'static>(predicate: C, args: Vec<Id>) -> Self {
        Self {
            predicate: Box::new(predicate),
            args,
        }
    }

    pub(crate) async fn check(&self, app_state: &AppState, user: &users::Model) -> bool {
        self.predicate
            .eval(app_state, user, self.args.clone())
            .await
    }
}

/// Evaluates `checks` in order and runs `next` only when every one passes.
pub(crate) async fn authorize(
    app_state: &AppState,
    authenticated_user: users::Model,
    request: Request,
    next: Next,
    checks: Vec<Predicate>,
) -> impl IntoResponse {
    for check in checks {
        if !check.check(app_state, &authenticated_user).await {
            debug!(
                "Denied {} {} for user {}",
                request.method(),
                request.uri(),
                authenticated_user.id
            );
            return (StatusCode::FORBIDDEN, "FORBIDDEN").into_response();
        }
    }
    next.run(request).await
}

pub struct UserIsAdmin;

#[async_trait]
impl Check for UserIsAdmin {
    async fn eval(
        &self,
        _app_state: &AppState,
        authenticated_user: &users::Model,
        _args: Vec<Id>,
    ) -> bool {
        authenticated_user.is_admin()
    }
}

pub struct UserIsInstructor;

#[async_trait]
impl Check for UserIsInstructor {
    async fn eval(
        &self,
        _app_state: &AppState,
        authenticated_user: &users::Model,
        _args: Vec<Id>,
    ) -> bool {
        authenticated_user.is_instructor
    }
}

/// Catalog writes and the admin dashboard.
pub(crate) async fn admin(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![Predicate::new(UserIsAdmin, vec![])];
    authorize(&app_state, user, request, next, checks).await
}

/// Client details for instructors.
pub(crate) async fn instructor(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    request: Request,
    next: Next,
) -> impl IntoResponse {
    let checks = vec![Predicate::new(UserIsInstructor, vec![])];
    authorize(&app_state, user, request, next, checks).await
}
