use uuid::Uuid;

use crate::grouping::{group_by_day, DayGroup};
use crate::models::MealType;
use crate::store::MealStore;

/// Interaction mode: browsing the grouped list or editing the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Browse,
    Insert,
}

/// Application state for one session.
pub struct App {
    pub store: MealStore,
    pub mode: Mode,
    /// Form draft: the meal name being typed
    pub draft_name: String,
    /// Form draft: the selected slot, retained across submits
    pub draft_type: MealType,
    /// Cursor position over `visible`
    pub cursor: usize,
    /// Meal ids in rendered order (day desc, slot order, insertion order)
    pub visible: Vec<Uuid>,
    /// Transient status notice, the toast analog
    pub notice: Option<String>,
}

impl App {
    pub fn new(default_type: MealType) -> Self {
        Self {
            store: MealStore::new(),
            mode: Mode::Browse,
            draft_name: String::new(),
            draft_type: default_type,
            cursor: 0,
            visible: Vec::new(),
            notice: None,
        }
    }

    /// The day-by-day view, recomputed from the store on every call.
    pub fn grouped(&self) -> Vec<DayGroup> {
        group_by_day(self.store.meals())
    }

    /// Recomputes the flattened row order and keeps the cursor in range.
    /// Called after every mutation of the store.
    pub fn refresh_visible(&mut self) {
        self.visible = self
            .grouped()
            .iter()
            .flat_map(|day| {
                day.sections
                    .iter()
                    .flat_map(|section| section.meals.iter().map(|meal| meal.id))
                    .collect::<Vec<_>>()
            })
            .collect();

        if self.visible.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len() - 1;
        }
    }

    /// Id of the meal under the cursor, if any.
    pub fn selected_meal_id(&self) -> Option<Uuid> {
        self.visible.get(self.cursor).copied()
    }
}
