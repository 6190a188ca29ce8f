use crate::error::Error;
use crate::foods::{ActiveModel, Column, Model};
use crate::Id;
use entity_api::{food, mutate, IntoUpdateMap};
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::food::{delete_by_id, find_all, find_by_id};

const MAX_NAME_LEN: usize = 40;

fn validate(food: &Model) -> Result<(), Error> {
    let name = food.name.trim();
    if name.is_empty() {
        return Err(Error::validation("Name is required."));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Error::validation(format!(
            "Name cannot be longer than {MAX_NAME_LEN} characters."
        )));
    }
    if food.protein < 0.0 || food.fat < 0.0 || food.carbs.is_some_and(|carbs| carbs < 0.0) {
        return Err(Error::validation("Nutrient values cannot be negative."));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, food_model: Model) -> Result<Model, Error> {
    validate(&food_model)?;
    Ok(food::create(db, food_model).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl IntoUpdateMap,
) -> Result<Model, Error> {
    let existing = find_by_id(db, id).await?;
    let active_model =
        mutate::apply::<ActiveModel, Column>(existing.into_active_model(), &params.into_update_map());
    validate(&mutate::preview(&active_model)?)?;
    Ok(mutate::save(db, active_model).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_api::food_type::FoodType;

    fn food(name: &str, protein: f64) -> Model {
        Model {
            id: Id::new_v4(),
            name: name.to_owned(),
            description: None,
            image_url: None,
            carbs: None,
            protein,
            fat: 1.0,
            food_type: FoodType::Protein,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[test]
    fn validate_accepts_a_forty_character_name() {
        assert!(validate(&food(&"a".repeat(40), 20.0)).is_ok());
    }

    #[test]
    fn validate_rejects_long_names() {
        assert!(validate(&food(&"a".repeat(41), 20.0)).is_err());
    }

    #[test]
    fn validate_rejects_negative_macros() {
        assert!(validate(&food("Tofu", -1.0)).is_err());
    }
}
