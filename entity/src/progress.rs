use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Day numbers a participant has ticked off, stored as a JSON array
/// (e.g. `[1, 3, 5]`). The list is unordered and never holds a duplicate.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
#[serde(transparent)]
pub struct Progress(pub Vec<i32>);

impl Progress {
    pub fn contains(&self, day: i32) -> bool {
        self.0.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn days(&self) -> &[i32] {
        &self.0
    }
}

impl From<Vec<i32>> for Progress {
    fn from(days: Vec<i32>) -> Self {
        Progress(days)
    }
}
