//! Pure derivation of the day-by-day view from the meal list. Stateless and
//! recomputed on every render; never incrementally maintained.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Meal, MealType};

/// Meals of one slot within a day. Never constructed empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSection {
    pub meal_type: MealType,
    pub meals: Vec<Meal>,
}

/// All meals planned for one calendar day, split into slot sections in
/// display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub sections: Vec<MealSection>,
}

/// Partitions meals by local calendar day, most recent day first. Within a
/// day, meals are split into slot sections ordered breakfast, lunch, dinner,
/// snack; slots with no meals are omitted. Insertion order is preserved
/// inside each section. An empty input yields an empty vector.
pub fn group_by_day(meals: &[Meal]) -> Vec<DayGroup> {
    let mut days: BTreeMap<NaiveDate, Vec<&Meal>> = BTreeMap::new();
    for meal in meals {
        days.entry(meal.day()).or_default().push(meal);
    }

    days.into_iter()
        .rev()
        .map(|(date, day_meals)| {
            let sections = MealType::ALL
                .iter()
                .filter_map(|&meal_type| {
                    let meals: Vec<Meal> = day_meals
                        .iter()
                        .filter(|meal| meal.meal_type == meal_type)
                        .map(|&meal| meal.clone())
                        .collect();
                    if meals.is_empty() {
                        None
                    } else {
                        Some(MealSection { meal_type, meals })
                    }
                })
                .collect();
            DayGroup { date, sections }
        })
        .collect()
}
