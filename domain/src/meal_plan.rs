use crate::error::Error;
use crate::foods::Model as FoodModel;
use crate::meal_foods::{self, ActiveModel as MealFoodActiveModel, Model as MealFoodModel};
use crate::meal_plan_users::Model as PlanUserModel;
use crate::meal_plans::{ActiveModel, Column, Model};
use crate::progress::{self, ProgressWindow};
use crate::Id;
use chrono::NaiveDate;
use entity_api::{
    food, meal_food, meal_plan, meal_plan_type::MealPlanType, meal_plan_user, mutate, query,
    IntoQueryFilterMap, IntoUpdateMap,
};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel, Order};
use serde::Serialize;
use std::ops::Add;

pub use entity_api::meal_plan::{delete_by_id, find_by_id};

/// Macro and calorie totals, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Nutrition {
    pub total_calories: f64,
    pub total_carbs: f64,
    pub total_protein: f64,
    pub total_fat: f64,
}

impl Nutrition {
    fn rounded(self) -> Self {
        Self {
            total_calories: round2(self.total_calories),
            total_carbs: round2(self.total_carbs),
            total_protein: round2(self.total_protein),
            total_fat: round2(self.total_fat),
        }
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            total_calories: self.total_calories + rhs.total_calories,
            total_carbs: self.total_carbs + rhs.total_carbs,
            total_protein: self.total_protein + rhs.total_protein,
            total_fat: self.total_fat + rhs.total_fat,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Nutrition of `grams` of `food`, whose macros are stored per 100g.
pub fn portion_nutrition(food: &FoodModel, grams: f64) -> Nutrition {
    let factor = grams / 100.0;
    Nutrition {
        total_calories: food.calories() * factor,
        total_carbs: food.carbs.unwrap_or_default() * factor,
        total_protein: food.protein * factor,
        total_fat: food.fat * factor,
    }
    .rounded()
}

/// Sum of the portions, rounded once at the end.
pub fn sum_nutrition<'a>(portions: impl IntoIterator<Item = &'a MealPortion>) -> Nutrition {
    portions
        .into_iter()
        .map(|portion| portion.nutrition)
        .fold(Nutrition::default(), Add::add)
        .rounded()
}

/// A meal food with its food and the nutrition of that portion.
#[derive(Debug, Clone, Serialize)]
pub struct MealPortion {
    #[serde(flatten)]
    pub meal_food: MealFoodModel,
    pub food: Option<FoodModel>,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl MealPortion {
    fn new(meal_food: MealFoodModel, food: Option<FoodModel>) -> Self {
        let nutrition = food
            .as_ref()
            .map(|food| portion_nutrition(food, meal_food.quantity_grams))
            .unwrap_or_default();
        Self {
            meal_food,
            food,
            nutrition,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanDetail {
    #[serde(flatten)]
    pub plan: Model,
    pub meal_foods: Vec<MealPortion>,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub meal_plan_id: Id,
    pub day: i32,
    pub meal_foods: Vec<MealPortion>,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, Serialize)]
pub struct Participation {
    #[serde(flatten)]
    pub participation: PlanUserModel,
    pub meal_plan: Model,
    pub completion_percent: u8,
}

impl Participation {
    fn new(participation: PlanUserModel, meal_plan: Model) -> Self {
        let completion_percent = progress::completion_percent(
            &participation.progress,
            &ProgressWindow::weeks(meal_plan.duration_weeks),
        );
        Self {
            participation,
            meal_plan,
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
    if plan.daily_calorie_target.is_some_and(|target| target < 0) {
        return Err(Error::validation("Daily calorie target cannot be negative."));
    }
    Ok(())
}

fn validate_meal_food(meal_food: &MealFoodModel) -> Result<(), Error> {
    if meal_food.quantity_grams < 1.0 {
        return Err(Error::validation("Quantity must be at least 1 gram."));
    }
    if meal_food.day < 1 {
        return Err(Error::validation("Day must be at least 1."));
    }
    Ok(())
}

pub async fn find_all(
    db: &DatabaseConnection,
    plan_type: Option<MealPlanType>,
) -> Result<Vec<Model>, Error> {
    Ok(meal_plan::find_all(db, plan_type).await?)
}

pub async fn create(db: &DatabaseConnection, plan_model: Model) -> Result<Model, Error> {
    validate(&plan_model)?;
    Ok(meal_plan::create(db, plan_model).await?)
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

pub async fn find_detail(db: &DatabaseConnection, id: Id) -> Result<PlanDetail, Error> {
    let plan = find_by_id(db, id).await?;
    let meal_foods = find_portions(db, plan.id, None).await?;
    let nutrition = sum_nutrition(&meal_foods);

    Ok(PlanDetail {
        plan,
        meal_foods,
        nutrition,
    })
}

/// Every portion scheduled for `day` of the plan with the day's totals.
pub async fn daily_summary(
    db: &DatabaseConnection,
    id: Id,
    day: i32,
) -> Result<DailySummary, Error> {
    let plan = find_by_id(db, id).await?;
    if !(1..=ProgressWindow::weeks(plan.duration_weeks).total_days()).contains(&day) {
        return Err(Error::validation("Day is outside the plan duration."));
    }

    let meal_foods = find_portions(db, plan.id, Some(day)).await?;
    let nutrition = sum_nutrition(&meal_foods);

    Ok(DailySummary {
        meal_plan_id: plan.id,
        day,
        meal_foods,
        nutrition,
    })
}

async fn find_portions(
    db: &DatabaseConnection,
    meal_plan_id: Id,
    day: Option<i32>,
) -> Result<Vec<MealPortion>, Error> {
    Ok(meal_food::find_by_plan_with_food(db, meal_plan_id, day)
        .await?
        .into_iter()
        .map(|(meal_food, food)| MealPortion::new(meal_food, food))
        .collect())
}

pub async fn create_meal_food(
    db: &DatabaseConnection,
    meal_food_model: MealFoodModel,
) -> Result<MealPortion, Error> {
    validate_meal_food(&meal_food_model)?;
    meal_plan::find_by_id(db, meal_food_model.meal_plan_id)
        .await
        .map_err(Error::missing_as_validation("Meal plan does not exist"))?;
    let food = food::find_by_id(db, meal_food_model.food_id)
        .await
        .map_err(Error::missing_as_validation("Food does not exist"))?;

    let meal_food = meal_food::create(db, meal_food_model).await?;
    Ok(MealPortion::new(meal_food, Some(food)))
}

pub async fn update_meal_food(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<MealPortion, Error> {
    let existing = meal_food::find_by_id(db, id).await?;
    let active_model = mutate::apply::<MealFoodActiveModel, meal_foods::Column>(
        existing.into_active_model(),
        &params.into_update_map(),
    );
    validate_meal_food(&mutate::preview(&active_model)?)?;

    let meal_food = mutate::save(db, active_model).await?;
    let food = food::find_by_id(db, meal_food.food_id).await.ok();
    Ok(MealPortion::new(meal_food, food))
}

pub use entity_api::meal_food::delete_by_id as delete_meal_food;

/// Meal foods matching `params` (`meal_plan_id`, `day`, `meal_time`), in menu order.
pub async fn find_meal_foods_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<MealFoodModel>, Error> {
    Ok(
        query::find_by_ordered::<meal_foods::Entity, meal_foods::Column>(
            db,
            params.into_query_filter_map(),
            &[
                (meal_foods::Column::Day, Order::Asc),
                (meal_foods::Column::MealTime, Order::Asc),
                (meal_foods::Column::Order, Order::Asc),
            ],
        )
        .await?,
    )
}

pub async fn find_participations(
    db: &DatabaseConnection,
    user_id: Id,
) -> Result<Vec<Participation>, Error> {
    Ok(meal_plan_user::find_by_user_with_plan(db, user_id)
        .await?
        .into_iter()
        .filter_map(|(participation, plan)| plan.map(|plan| Participation::new(participation, plan)))
        .collect())
}

/// A user follows one meal plan at a time.
pub async fn join(
    db: &DatabaseConnection,
    user_id: Id,
    meal_plan_id: Id,
) -> Result<Participation, Error> {
    let plan = meal_plan::find_by_id(db, meal_plan_id)
        .await
        .map_err(Error::missing_as_validation("Meal plan does not exist"))?;

    if meal_plan_user::find_by_user_and_plan(db, user_id, plan.id)
        .await?
        .is_some()
    {
        return Err(Error::validation("You have already joined this meal plan."));
    }
    if meal_plan_user::count_by_user(db, user_id).await? > 0 {
        return Err(Error::validation("You can only join one meal plan at a time."));
    }

    let participation = meal_plan_user::create(db, user_id, plan.id).await?;
    info!("User {user_id} joined meal plan {}", plan.id);

    Ok(Participation::new(participation, plan))
}

async fn find_owned(db: &DatabaseConnection, user_id: Id, id: Id) -> Result<PlanUserModel, Error> {
    let participation = meal_plan_user::find_by_id(db, id).await?;
    if participation.user_id != user_id {
        warn!("User {user_id} attempted to access meal plan participation {id}");
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
    let plan = meal_plan::find_by_id(db, participation.meal_plan_id).await?;
    Ok(Participation::new(participation, plan))
}

pub async fn leave(db: &DatabaseConnection, user_id: Id, id: Id) -> Result<(), Error> {
    let participation = find_owned(db, user_id, id).await?;
    meal_plan_user::delete_by_id(db, participation.id).await?;
    info!(
        "User {user_id} left meal plan {}",
        participation.meal_plan_id
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
    let plan = meal_plan::find_by_id(db, participation.meal_plan_id).await?;

    let progress = progress::tick_day(
        &participation.progress,
        day,
        &ProgressWindow::weeks(plan.duration_weeks),
        today,
    )?;
    let participation = meal_plan_user::update_progress(db, participation, progress).await?;

    Ok(Participation::new(participation, plan))
}

pub async fn count_participations(db: &DatabaseConnection) -> Result<u64, Error> {
    Ok(meal_plan_user::count_all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_api::{food_type::FoodType, meal_time::MealTime};

    fn food(carbs: Option<f64>, protein: f64, fat: f64) -> FoodModel {
        FoodModel {
            id: Id::new_v4(),
            name: "Rolled Oats".to_owned(),
            description: None,
            image_url: None,
            carbs,
            protein,
            fat,
            food_type: FoodType::Grain,
            created_at: chrono::Utc::now().into(),
        }
    }

    fn portion(food: FoodModel, grams: f64) -> MealPortion {
        let meal_food = MealFoodModel {
            id: Id::new_v4(),
            meal_plan_id: Id::new_v4(),
            food_id: food.id,
            meal_time: MealTime::Breakfast,
            quantity_grams: grams,
            day: 1,
            order: 0,
        };
        MealPortion::new(meal_food, Some(food))
    }

    #[test]
    fn portion_nutrition_scales_per_hundred_grams() {
        // 66g carbs, 17g protein, 7g fat per 100g: 395 kcal
        let oats = food(Some(66.0), 17.0, 7.0);

        let nutrition = portion_nutrition(&oats, 50.0);

        assert_eq!(
            nutrition,
            Nutrition {
                total_calories: 197.5,
                total_carbs: 33.0,
                total_protein: 8.5,
                total_fat: 3.5,
            }
        );
    }

    #[test]
    fn portion_nutrition_rounds_to_two_decimals() {
        let nutrition = portion_nutrition(&food(None, 31.0, 3.6), 33.0);

        assert_eq!(nutrition.total_protein, 10.23);
        assert_eq!(nutrition.total_fat, 1.19);
        assert_eq!(nutrition.total_carbs, 0.0);
    }

    #[test]
    fn sum_nutrition_adds_every_portion() {
        let portions = vec![
            portion(food(Some(66.0), 17.0, 7.0), 100.0),
            portion(food(None, 31.0, 3.6), 200.0),
        ];

        let total = sum_nutrition(&portions);

        assert_eq!(total.total_protein, 79.0);
        assert_eq!(total.total_carbs, 66.0);
        assert_eq!(total.total_fat, 14.2);
    }

    #[test]
    fn portion_without_a_food_has_no_nutrition() {
        let meal_food = MealFoodModel {
            id: Id::new_v4(),
            meal_plan_id: Id::new_v4(),
            food_id: Id::new_v4(),
            meal_time: MealTime::Lunch,
            quantity_grams: 150.0,
            day: 2,
            order: 1,
        };

        assert_eq!(MealPortion::new(meal_food, None).nutrition, Nutrition::default());
    }
}

#[cfg(test)]
// seaORM's mock feature removes Clone from DatabaseConnection, see
// https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod participation_tests {
    use super::*;
    use crate::error::{DomainErrorKind, EntityErrorKind, InternalErrorKind};
    use entity_api::progress::Progress;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value};
    use std::collections::BTreeMap;

    fn plan(duration_weeks: i32) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: Id::new_v4(),
            name: "Lean Week".to_owned(),
            description: None,
            plan_type: MealPlanType::WeightLoss,
            daily_calorie_target: Some(1800),
            duration_weeks,
            image_url: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn participation(user_id: Id, meal_plan_id: Id, days: Vec<i32>) -> PlanUserModel {
        PlanUserModel {
            id: Id::new_v4(),
            user_id,
            meal_plan_id,
            progress: Progress(days),
            joined_at: chrono::Utc::now().into(),
        }
    }

    fn count(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn join_rejects_a_missing_plan() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let err = join(&db, Id::new_v4(), Id::new_v4()).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Meal plan does not exist".to_string())
        );
    }

    #[tokio::test]
    async fn join_reports_a_lost_connection_as_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
                "connection reset".to_owned(),
            ))])
            .into_connection();

        let err = join(&db, Id::new_v4(), Id::new_v4()).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::DbTransaction))
        );
    }

    #[tokio::test]
    async fn join_rejects_a_duplicate_join() {
        let user_id = Id::new_v4();
        let plan = plan(2);
        let existing = participation(user_id, plan.id, vec![]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan.clone()]])
            .append_query_results([[existing]])
            .into_connection();

        let err = join(&db, user_id, plan.id).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("You have already joined this meal plan.".to_string())
        );
    }

    #[tokio::test]
    async fn join_rejects_a_second_plan() {
        let plan = plan(2);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan.clone()]])
            .append_query_results([Vec::<PlanUserModel>::new()])
            .append_query_results([[count(1)]])
            .into_connection();

        let err = join(&db, Id::new_v4(), plan.id).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("You can only join one meal plan at a time.".to_string())
        );
    }

    #[tokio::test]
    async fn tick_day_stores_the_new_day() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let plan = plan(1);
        let existing = participation(user_id, plan.id, vec![1]);
        let updated = PlanUserModel {
            progress: Progress(vec![1, 7]),
            ..existing.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[plan]])
            .append_query_results([[updated]])
            .into_connection();

        let joined = tick_day(&db, user_id, existing.id, 7, today()).await?;

        assert_eq!(joined.participation.progress, Progress(vec![1, 7]));
        assert_eq!(joined.completion_percent, 29);

        Ok(())
    }

    #[tokio::test]
    async fn tick_day_rejects_a_day_past_the_plan() {
        let user_id = Id::new_v4();
        let plan = plan(1);
        let existing = participation(user_id, plan.id, vec![]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing.clone()]])
            .append_query_results([[plan]])
            .into_connection();

        let err = tick_day(&db, user_id, existing.id, 8, today())
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Day is outside the plan duration.".to_string())
        );
    }

    #[tokio::test]
    async fn leave_hides_other_users_participations() {
        let someone_else = participation(Id::new_v4(), Id::new_v4(), vec![]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[someone_else.clone()]])
            .into_connection();

        let err = leave(&db, Id::new_v4(), someone_else.id)
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::NotFound("Participation not found".to_string())
        );
    }

    #[tokio::test]
    async fn leave_deletes_the_own_participation() -> Result<(), Error> {
        let user_id = Id::new_v4();
        let own = participation(user_id, Id::new_v4(), vec![2]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[own.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        leave(&db, user_id, own.id).await?;

        Ok(())
    }

    #[tokio::test]
    async fn daily_summary_rejects_a_day_past_the_plan() {
        let plan = plan(1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan.clone()]])
            .into_connection();

        let err = daily_summary(&db, plan.id, 8).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Day is outside the plan duration.".to_string())
        );
    }

    #[tokio::test]
    async fn daily_summary_rejects_day_zero_even_for_huge_plans() {
        let plan = plan(i32::MAX);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[plan.clone()]])
            .into_connection();

        let err = daily_summary(&db, plan.id, 0).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Validation("Day is outside the plan duration.".to_string())
        );
    }
}
