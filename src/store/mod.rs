//! In-memory meal collection. Owns the canonical list for the lifetime of
//! the session; nothing is persisted.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Meal, MealType};

/// Errors raised when mutating the store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// The submitted name was empty after trimming.
    #[error("meal name cannot be empty")]
    EmptyName,
}

/// Append-only collection of meals. Records keep their insertion order;
/// `add` and `remove` are the only mutations.
#[derive(Debug, Default)]
pub struct MealStore {
    meals: Vec<Meal>,
}

impl MealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a meal from the trimmed name and the given slot, appends it
    /// and returns it. Rejects names that are empty after trimming.
    pub fn add(&mut self, name: &str, meal_type: MealType) -> Result<Meal, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let meal = Meal::new(name, meal_type);
        tracing::debug!(id = %meal.id, slot = %meal.meal_type, "meal added");
        self.meals.push(meal.clone());
        Ok(meal)
    }

    /// Removes the meal with the given id and returns it. Absent ids are a
    /// silent no-op, not an error.
    pub fn remove(&mut self, id: Uuid) -> Option<Meal> {
        let index = self.meals.iter().position(|meal| meal.id == id)?;
        let meal = self.meals.remove(index);
        tracing::debug!(id = %id, "meal removed");
        Some(meal)
    }

    pub fn get(&self, id: Uuid) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// All meals in insertion order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
