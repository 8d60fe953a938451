use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::meal_type::MealType;

/// A single planned food item. Immutable once created; removal is the only
/// lifecycle transition after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub meal_type: MealType,
    pub created_at: DateTime<Local>,
}

impl Meal {
    pub fn new(name: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            meal_type,
            created_at: Local::now(),
        }
    }

    /// Calendar day this meal belongs to in the grouped view.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.meal_type)
    }
}
