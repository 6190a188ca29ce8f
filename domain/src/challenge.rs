use crate::challenge_participants::Model as ParticipantModel;
use crate::challenges::{ActiveModel, Column, Model};
use crate::error::Error;
use crate::progress::{self, ProgressWindow};
use crate::Id;
use chrono::NaiveDate;
use entity_api::{challenge, challenge_participant, mutate, IntoUpdateMap};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel};
use serde::Serialize;

pub use entity_api::challenge::{delete_by_id, find_all, find_by_id};

/// A participation together with its challenge and how far along it is.
#[derive(Debug, Clone, Serialize)]
pub struct Participation {
    #[serde(flatten)]
    pub participant: ParticipantModel,
    pub challenge: Model,
    pub completion_percent: u8,
}

impl Participation {
    fn new(participant: ParticipantModel, challenge: Model, max_days: i32) -> Self {
        let window = window(&challenge, max_days);
        let completion_percent = progress::completion_percent(&participant.progress, &window);
        Self {
            participant,
            challenge,
            completion_percent,
        }
    }
}

fn window(challenge: &Model, max_days: i32) -> ProgressWindow {
    ProgressWindow::challenge(challenge.start_date, challenge.end_date, max_days)
}

fn validate(challenge: &Model) -> Result<(), Error> {
    if challenge.title.trim().is_empty() {
        return Err(Error::validation("Title is required."));
    }
    if challenge.end_date < challenge.start_date {
        return Err(Error::validation(
            "End date must be on or after the start date.",
        ));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, challenge_model: Model) -> Result<Model, Error> {
    validate(&challenge_model)?;
    Ok(challenge::create(db, challenge_model).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, id).await?;
    let active_model = mutate::apply::<ActiveModel, Column>(
        existing.into_active_model(),
        &params.into_update_map(),
    );
    validate(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

/// Running challenges on `today`.
pub async fn count_ongoing(db: &DatabaseConnection, today: NaiveDate) -> Result<u64, Error> {
    Ok(challenge::count_active_on(db, today).await?)
}

pub async fn find_participations(
    db: &DatabaseConnection,
    user_id: Id,
    max_days: i32,
) -> Result<Vec<Participation>, Error> {
    let participations = challenge_participant::find_by_user_with_challenge(db, user_id).await?;

    Ok(participations
        .into_iter()
        .filter_map(|(participant, challenge)| {
            challenge.map(|challenge| Participation::new(participant, challenge, max_days))
        })
        .collect())
}

/// Enrolls `user_id` in a challenge. A user takes part in at most one challenge.
pub async fn join(
    db: &DatabaseConnection,
    user_id: Id,
    challenge_id: Id,
    today: NaiveDate,
    max_days: i32,
) -> Result<Participation, Error> {
    if challenge_participant::count_by_user(db, user_id).await? > 0 {
        return Err(Error::validation(
            "You are already enrolled in a challenge. You can only join one challenge at a time.",
        ));
    }

    let challenge = challenge::find_by_id(db, challenge_id)
        .await
        .map_err(Error::missing_as_validation("Challenge does not exist"))?;

    let participant = challenge_participant::create(db, user_id, challenge.id, today).await?;
    info!("User {user_id} joined challenge {}", challenge.id);

    Ok(Participation::new(participant, challenge, max_days))
}

async fn find_owned_participant(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
) -> Result<ParticipantModel, Error> {
    let participant = challenge_participant::find_by_id(db, id).await?;
    if participant.user_id != user_id {
        warn!("User {user_id} attempted to access challenge participation {id}");
        return Err(Error::not_found("Participation not found"));
    }
    Ok(participant)
}

pub async fn find_participation(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
    max_days: i32,
) -> Result<Participation, Error> {
    let participant = find_owned_participant(db, user_id, id).await?;
    let challenge = challenge::find_by_id(db, participant.challenge_id).await?;
    Ok(Participation::new(participant, challenge, max_days))
}

pub async fn leave(db: &DatabaseConnection, user_id: Id, id: Id) -> Result<(), Error> {
    let participant = find_owned_participant(db, user_id, id).await?;
    challenge_participant::delete_by_id(db, participant.id).await?;
    info!("User {user_id} left challenge {}", participant.challenge_id);
    Ok(())
}

pub async fn tick_day(
    db: &DatabaseConnection,
    user_id: Id,
    id: Id,
    day: i32,
    today: NaiveDate,
    max_days: i32,
) -> Result<Participation, Error> {
    let participant = find_owned_participant(db, user_id, id).await?;
    let challenge = challenge::find_by_id(db, participant.challenge_id).await?;

    let progress = progress::tick_day(
        &participant.progress,
        day,
        &window(&challenge, max_days),
        today,
    )?;
    let participant = challenge_participant::update_progress(db, participant, progress).await?;
    debug!("Challenge participation {id} progress: {:?}", participant.progress);

    Ok(Participation::new(participant, challenge, max_days))
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, InternalErrorKind};
    use entity_api::{
        challenge_muscle_group::ChallengeMuscleGroup, difficulty::Difficulty,
        progress::Progress, workout_type::WorkoutType,
    };
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn challenge_model() -> Model {
        Model {
            id: Id::new_v4(),
            title: "June Core".to_owned(),
            description: "Core every day".to_owned(),
            duration: "30 days".to_owned(),
            start_date: date(1),
            end_date: date(30),
            difficulty: Difficulty::Intermediate,
            muscle_group: ChallengeMuscleGroup::Core,
            workout_type: WorkoutType::Strength,
            image_url: None,
            created_at: chrono::Utc::now().into(),
        }
    }

    fn participant(user_id: Id, challenge_id: Id, days: Vec<i32>) -> ParticipantModel {
        ParticipantModel {
            id: Id::new_v4(),
            user_id,
            challenge_id,
            date_joined: date(1),
            progress: Progress(days),
        }
    }

    fn enrolled_count(count: i64) -> std::collections::BTreeMap<&'static str, sea_orm::Value> {
        std::collections::BTreeMap::from([("num_items", sea_orm::Value::BigInt(Some(count)))])
    }

    #[tokio::test]
    async fn join_rejects_a_second_challenge_before_looking_it_up() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[enrolled_count(1)]])
            .into_connection();

        // The id does not exist either; enrollment is reported first.
        let err = join(&db, Id::new_v4(), Id::new_v4(), date(2), 30)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation(
                "You are already enrolled in a challenge. You can only join one challenge at a time."
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn join_rejects_a_missing_challenge() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[enrolled_count(0)]])
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let err = join(&db, Id::new_v4(), Id::new_v4(), date(2), 30)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Challenge does not exist".to_string())
        );
    }

    #[tokio::test]
    async fn join_keeps_database_failures_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[enrolled_count(0)]])
            .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
                "connection reset".to_owned(),
            ))])
            .into_connection();

        let err = join(&db, Id::new_v4(), Id::new_v4(), date(2), 30)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::DbTransaction))
        );
    }

    #[tokio::test]
    async fn tick_day_stores_the_new_day() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let challenge = challenge_model();
        let existing = participant(user_id, challenge.id, vec![1]);
        let updated = ParticipantModel {
            progress: Progress(vec![1, 2]),
            ..existing.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[challenge.clone()]])
            .append_query_results([[updated]])
            .into_connection();

        let participation = tick_day(&db, user_id, existing.id, 2, date(2), 30).await?;

        assert_eq!(participation.participant.progress, Progress(vec![1, 2]));
        assert_eq!(participation.completion_percent, 7);

        Ok(())
    }

    #[tokio::test]
    async fn tick_day_hides_other_users_participations() {
        let challenge = challenge_model();
        let someone_else = participant(Id::new_v4(), challenge.id, vec![]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[someone_else.clone()]])
            .into_connection();

        let err = tick_day(&db, Id::new_v4(), someone_else.id, 1, date(2), 30)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::NotFound("Participation not found".to_string())
        );
    }

    #[tokio::test]
    async fn create_rejects_an_end_date_before_the_start() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let challenge = Model {
            end_date: date(1),
            start_date: date(5),
            ..challenge_model()
        };

        let err = create(&db, challenge).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("End date must be on or after the start date.".to_string())
        );
    }
}
