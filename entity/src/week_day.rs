use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Day of the week a fitness plan exercise is scheduled on.
#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "week_day")]
pub enum WeekDay {
    #[serde(rename = "monday")]
    #[sea_orm(string_value = "monday")]
    #[default]
    Monday,
    #[serde(rename = "tuesday")]
    #[sea_orm(string_value = "tuesday")]
    Tuesday,
    #[serde(rename = "wednesday")]
    #[sea_orm(string_value = "wednesday")]
    Wednesday,
    #[serde(rename = "thursday")]
    #[sea_orm(string_value = "thursday")]
    Thursday,
    #[serde(rename = "friday")]
    #[sea_orm(string_value = "friday")]
    Friday,
    #[serde(rename = "saturday")]
    #[sea_orm(string_value = "saturday")]
    Saturday,
    #[serde(rename = "sunday")]
    #[sea_orm(string_value = "sunday")]
    Sunday,
}

impl WeekDay {
    /// Zero based position in the week, Monday first.
    pub fn index(&self) -> u32 {
        match self {
            WeekDay::Monday => 0,
            WeekDay::Tuesday => 1,
            WeekDay::Wednesday => 2,
            WeekDay::Thursday => 3,
            WeekDay::Friday => 4,
            WeekDay::Saturday => 5,
            WeekDay::Sunday => 6,
        }
    }

    /// Human readable label shown next to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for WeekDay {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekDay::Monday => write!(fmt, "monday"),
            WeekDay::Tuesday => write!(fmt, "tuesday"),
            WeekDay::Wednesday => write!(fmt, "wednesday"),
            WeekDay::Thursday => write!(fmt, "thursday"),
            WeekDay::Friday => write!(fmt, "friday"),
            WeekDay::Saturday => write!(fmt, "saturday"),
            WeekDay::Sunday => write!(fmt, "sunday"),
        }
    }
}
