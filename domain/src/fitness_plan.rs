use crate::error::Error;
use crate::exercises::Model as ExerciseModel;
use crate::fitness_plan_exercises::{
    self, ActiveModel as PlanExerciseActiveModel, Model as PlanExerciseModel,
};
use crate::fitness_plan_users::Model as PlanUserModel;
use crate::fitness_plans::{ActiveModel, Column, Model};
use crate::progress::{self, ProgressWindow};
use crate::Id;
use chrono::NaiveDate;
use entity_api::{
    exercise, fitness_plan, fitness_plan_exercise, fitness_plan_user, mutate, query,
    IntoQueryFilterMap, IntoUpdateMap,
};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel, Order};
use serde::Serialize;

pub use entity_api::fitness_plan::{delete_by_id, find_all, find_by_id};

/// One scheduled exercise with the exercise it points at.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledExercise {
    #[serde(flatten)]
    pub plan_exercise: PlanExerciseModel,
    pub exercise: Option<ExerciseModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanDetail {
    #[serde(flatten)]
    pub plan: Model,
    pub exercises: Vec<ScheduledExercise>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Participation {
    #[serde(flatten)]
    pub participation: PlanUserModel,
    pub fitness_plan: Model,
    pub completion_percent: u8,
}

impl Participation {
    fn new(participation: PlanUserModel, fitness_plan: Model) -> Self {
        let completion_percent = progress::completion_percent(
            &participation.progress,
            &ProgressWindow::weeks(fitness_plan.duration_weeks),
        );
        Self {
            participation,
            fitness_plan,
            completion_percent,
        }
    }
}

fn validate(plan: &Model) -> Result<(), Error> {
    if plan.name.trim().is_empty() {
        return Err(Error::validation("Name is required."));
    }
    if plan.duration_weeks < 1 {
        return Err(Error::validation("Duration must be at least one week."));
    }
    Ok(())
}

fn validate_plan_exercise(plan_exercise: &PlanExerciseModel) -> Result<(), Error> {
    if plan_exercise.sets < 1 || plan_exercise.reps < 1 {
        return Err(Error::validation("Sets and reps must be at least 1."));
    }
    if plan_exercise.duration_minutes.is_some_and(|minutes| minutes < 0) {
        return Err(Error::validation("Duration cannot be negative."));
    }
    Ok(())
}

/// Creates a plan along with any scheduled exercises submitted with it.
pub async fn create(
    db: &DatabaseConnection,
    plan_model: Model,
    exercises: Vec<PlanExerciseModel>,
) -> Result<PlanDetail, Error> {
    validate(&plan_model)?;
    for plan_exercise in &exercises {
        validate_plan_exercise(plan_exercise)?;
    }

    let (plan, created) = fitness_plan::create_with_exercises(db, plan_model, exercises).await?;
    info!(
        "Created fitness plan {} with {} exercises",
        plan.id,
        created.len()
    );

    Ok(PlanDetail {
        plan,
        exercises: created
            .into_iter()
            .map(|plan_exercise| ScheduledExercise {
                plan_exercise,
                exercise: None,
            })
            .collect(),
    })
}

pub async fn find_detail(db: &DatabaseConnection, id: Id) -> Result<PlanDetail, Error> {
    let plan = find_by_id(db, id).await?;
    let exercises = fitness_plan_exercise::find_by_plan_with_exercise(db, plan.id)
        .await?
        .into_iter()
        .map(|(plan_exercise, exercise)| ScheduledExercise {
            plan_exercise,
            exercise,
        })
        .collect();

    Ok(PlanDetail { plan, exercises })
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, id).await?;
    let mut update_map = params.into_update_map();
    update_map.touch();

    let active_model =
        mutate::apply::<ActiveModel, Column>(existing.into_active_model(), &update_map);
    validate(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

pub async fn create_exercise(
    db: &DatabaseConnection,
    plan_exercise: PlanExerciseModel,
) -> Result<PlanExerciseModel, Error> {
    validate_plan_exercise(&plan_exercise)?;
    fitness_plan::find_by_id(db, plan_exercise.fitness_plan_id)
        .await
        .map_err(Error::missing_as_validation("Fitness plan does not exist"))?;
    exercise::find_by_id(db, plan_exercise.exercise_id)
        .await
        .map_err(Error::missing_as_validation("Exercise does not exist"))?;

    Ok(fitness_plan_exercise::create(db, plan_exercise).await?)
}

pub async fn update_exercise(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<PlanExerciseModel, Error> {
    let existing = fitness_plan_exercise::find_by_id(db, id).await?;
    let active_model = mutate::apply::<PlanExerciseActiveModel, fitness_plan_exercises::Column>(
        existing.into_active_model(),
        &params.into_update_map(),
    );
    validate_plan_exercise(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

pub use entity_api::fitness_plan_exercise::delete_by_id as delete_exercise;

/// Scheduled exercises matching `params` (`fitness_plan_id`, `day`), in schedule order.
pub async fn find_exercises_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<PlanExerciseModel>, Error> {
    Ok(query::find_by_ordered::<
        fitness_plan_exercises::Entity,
        fitness_plan_exercises::Column,
    >(
        db,
        params.into_query_filter_map(),
        &[
            (fitness_plan_exercises::Column::Day, Order::Asc),
            (fitness_plan_exercises::Column::Order, Order::Asc),
        ],
    )
    .await?)
}

pub async fn find_participations(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Vec<Participation>, Error> {
    Ok(fitness_plan_user::find_by_user_with_plan(db, user_id)
        .await?
        .into_iter()
        .filter_map(|(participation, plan)| plan.map(|plan| Participation::new(participation, plan)))
        .collect())
}

/// A user follows one fitness plan at a time.
pub async fn join(
    db: &DatabaseConnection,
    user_id: Id,
    fitness_plan_id: Id,
) -> Result<Participation, Error> {
    let plan = fitness_plan::find_by_id(db, fitness_plan_id)
        .await
        .map_err(Error::missing_as_validation("Fitness plan does not exist"))?;

    if fitness_plan_user::find_by_user_and_plan(db, user_id, plan.id)
        .await?
        .is_some()
    {
        return Err(Error::validation("You have already joined this fitness plan."));
    }
    if fitness_plan_user::count_by_user(db, user_id).await? > 0 {
        return Err(Error::validation(
            "You can only join one fitness plan at a time.",
        ));
    }

    let participation = fitness_plan_user::create(db, user_id, plan.id).await?;
    info!("User {user_id} joined fitness plan {}", plan.id);

    Ok(Participation::new(participation, plan))
}

async fn find_owned(db: &DatabaseConnection, user_id: Id, id: Id) -> Result<PlanUserModel, Error> {
    let participation = fitness_plan_user::find_by_id(db, id).await?;
    if participation.user_id != user_id {
        warn!("User {user_id} attempted to access fitness plan participation {id}");
        return Err(Error::not_found("Participation not found"));
    }
    Ok(participation)
}

pub async fn find_participation(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
) -> Result<Participation, Error> {
    let participation = find_owned(db, user_id, id).await?;
    let plan = fitness_plan::find_by_id(db, participation.fitness_plan_id).await?;
    Ok(Participation::new(participation, plan))
}

pub async fn leave(db: &DatabaseConnection, user_id: Id, id: Id) -> Result<(), Error> {
    let participation = find_owned(db, user_id, id).await?;
    fitness_plan_user::delete_by_id(db, participation.id).await?;
    info!(
        "User {user_id} left fitness plan {}",
        participation.fitness_plan_id
    );
    Ok(())
}

pub async fn tick_day(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
    day: i32,
    today: NaiveDate,
) -> Result<Participation, Error> {
    let participation = find_owned(db, user_id, id).await?;
    let plan = fitness_plan::find_by_id(db, participation.fitness_plan_id).await?;

    let progress = progress::tick_day(
        &participation.progress,
        day,
        &ProgressWindow::weeks(plan.duration_weeks),
        today,
    )?;
    let participation = fitness_plan_user::update_progress(db, participation, progress).await?;

    Ok(Participation::new(participation, plan))
}

pub async fn count_participations(db: &DatabaseConnection) -> Result<u64, Error> {
    Ok(fitness_plan_user::count_all(db).await?)
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
        activity_level::ActivityLevel, fitness_plan_type::FitnessPlanType, progress::Progress,
        week_day::WeekDay,
    };
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn plan(duration_weeks: i32) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: Id::new_v4(),
            name: "Starter Strength".to_owned(),
            description: None,
            plan_type: FitnessPlanType::MuscleGain,
            duration_weeks,
            difficulty: ActivityLevel::Moderate,
            picture_url: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn participation(user_id: Id, fitness_plan_id: Id, days: Vec<i32>) -> PlanUserModel {
        PlanUserModel {
            id: Id::new_v4(),
            user_id,
            fitness_plan_id,
            progress: Progress(days),
            joined_at: chrono::Utc::now().into(),
        }
    }

    fn count(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn join_rejects_a_duplicate_join() {
        let user_id = Id::new_v4();
        let plan = plan(4);
        let existing = participation(user_id, plan.id, vec![]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan.clone()]])
            .append_query_results([[existing]])
            .into_connection();

        let err = join(&db, user_id, plan.id).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("You have already joined this fitness plan.".to_string())
        );
    }

    #[tokio::test]
    async fn join_rejects_a_second_plan() {
        let plan = plan(4);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan.clone()]])
            .append_query_results([Vec::<PlanUserModel>::new()])
            .append_query_results([[count(1)]])
            .into_connection();

        let err = join(&db, Id::new_v4(), plan.id).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("You can only join one fitness plan at a time.".to_string())
        );
    }

    #[tokio::test]
    async fn tick_day_rejects_a_day_past_the_plan() {
        let user_id = Id::new_v4();
        let plan = plan(1);
        let existing = participation(user_id, plan.id, vec![]);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[plan]])
            .into_connection();

        let err = tick_day(&db, user_id, existing.id, 8, today)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Day is outside the plan duration.".to_string())
        );
    }

    #[tokio::test]
    async fn create_rejects_zero_week_plans() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = create(&db, plan(0), vec![]).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Duration must be at least one week.".to_string())
        );
    }

    #[tokio::test]
    async fn create_exercise_rejects_zero_sets() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let plan_exercise = PlanExerciseModel {
            id: Id::new_v4(),
            fitness_plan_id: Id::new_v4(),
            exercise_id: Id::new_v4(),
            day: WeekDay::Monday,
            sets: 0,
            reps: 10,
            duration_minutes: None,
            order: 0,
        };

        let err = create_exercise(&db, plan_exercise).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Sets and reps must be at least 1.".to_string())
        );
    }
}
