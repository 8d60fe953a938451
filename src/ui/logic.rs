//! Action dispatch. Every form and list behavior lives here so it can be
//! exercised in tests without a terminal.

use super::actions::Action;
use super::state::{App, Mode};

impl App {
    /// Applies one action. Returns true when the app should quit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::CursorUp => self.cursor_up(),
            Action::CursorDown => self.cursor_down(),

            Action::OpenForm => self.open_form(),
            Action::DeleteSelected => self.delete_selected(),

            Action::Input(c) => {
                if self.mode == Mode::Insert {
                    self.draft_name.push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == Mode::Insert {
                    self.draft_name.pop();
                }
            }
            Action::CycleSlotForward => self.draft_type = self.draft_type.next(),
            Action::CycleSlotBack => self.draft_type = self.draft_type.prev(),
            Action::Submit => self.submit_form(),
            Action::CloseForm => self.close_form(),
        }
        false
    }

    fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    fn open_form(&mut self) {
        self.mode = Mode::Insert;
        self.notice = None;
    }

    /// Leaves the form without submitting. The draft is kept so a half-typed
    /// name survives a switch back to browsing.
    fn close_form(&mut self) {
        self.mode = Mode::Browse;
        self.notice = None;
    }

    /// Submits the form. On success the name clears and the slot selection
    /// is retained; on a validation failure the form stays populated and the
    /// failure surfaces as a notice only.
    fn submit_form(&mut self) {
        match self.store.add(&self.draft_name, self.draft_type) {
            Ok(meal) => {
                self.draft_name.clear();
                self.notice = Some(format!("Added {} to {}", meal.name, meal.meal_type.label()));
                self.refresh_visible();
            }
            Err(e) => {
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Deletes the record under the cursor. Nothing selected is a no-op.
    fn delete_selected(&mut self) {
        let Some(id) = self.selected_meal_id() else {
            return;
        };
        self.store.remove(id);
        self.refresh_visible();
        self.notice = Some("Meal deleted".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn insert_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_typed_submit_adds_meal_and_clears_name() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::OpenForm);
        insert_text(&mut app, "Oatmeal");

        app.dispatch(Action::Submit);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.meals()[0].name, "Oatmeal");
        assert!(app.draft_name.is_empty());
        // Slot selection survives the submit
        assert_eq!(app.draft_type, MealType::Breakfast);
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(
            app.notice.as_deref(),
            Some("Added Oatmeal to breakfast meal")
        );
        assert_eq!(app.visible.len(), 1);
    }

    #[test]
    fn test_blank_submit_is_rejected_with_notice() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::OpenForm);
        insert_text(&mut app, "   ");

        app.dispatch(Action::Submit);

        assert!(app.store.is_empty());
        // Form stays populated for correction
        assert_eq!(app.draft_name, "   ");
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(app.notice.as_deref(), Some("meal name cannot be empty"));
    }

    #[test]
    fn test_slot_cycling() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::OpenForm);

        app.dispatch(Action::CycleSlotForward);
        assert_eq!(app.draft_type, MealType::Lunch);
        app.dispatch(Action::CycleSlotForward);
        assert_eq!(app.draft_type, MealType::Dinner);
        app.dispatch(Action::CycleSlotBack);
        assert_eq!(app.draft_type, MealType::Lunch);
    }

    #[test]
    fn test_backspace_edits_draft() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::OpenForm);
        insert_text(&mut app, "Teaa");

        app.dispatch(Action::DeleteChar);

        assert_eq!(app.draft_name, "Tea");
    }

    #[test]
    fn test_typing_ignored_outside_form() {
        let mut app = App::new(MealType::Breakfast);

        app.dispatch(Action::Input('x'));
        app.dispatch(Action::DeleteChar);

        assert!(app.draft_name.is_empty());
    }

    #[test]
    fn test_close_form_keeps_draft() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::OpenForm);
        insert_text(&mut app, "Sou");

        app.dispatch(Action::CloseForm);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.draft_name, "Sou");
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_delete_selected_removes_record_under_cursor() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::OpenForm);
        insert_text(&mut app, "Eggs");
        app.dispatch(Action::Submit);
        insert_text(&mut app, "Toast");
        app.dispatch(Action::Submit);
        app.dispatch(Action::CloseForm);

        app.dispatch(Action::CursorDown);
        let target = app.selected_meal_id().unwrap();
        assert!(!app.dispatch(Action::DeleteSelected));

        assert_eq!(app.store.len(), 1);
        assert!(app.store.get(target).is_none());
        assert_eq!(app.notice.as_deref(), Some("Meal deleted"));
    }

    #[test]
    fn test_delete_with_empty_list_is_noop() {
        let mut app = App::new(MealType::Breakfast);

        app.dispatch(Action::DeleteSelected);

        assert!(app.store.is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut app = App::new(MealType::Breakfast);
        app.dispatch(Action::CursorUp);
        app.dispatch(Action::CursorDown);
        assert_eq!(app.cursor, 0);

        app.dispatch(Action::OpenForm);
        insert_text(&mut app, "Eggs");
        app.dispatch(Action::Submit);
        insert_text(&mut app, "Toast");
        app.dispatch(Action::Submit);
        app.dispatch(Action::CloseForm);

        app.dispatch(Action::CursorDown);
        app.dispatch(Action::CursorDown);
        assert_eq!(app.cursor, 1);
        app.dispatch(Action::CursorUp);
        app.dispatch(Action::CursorUp);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_quit_from_browse() {
        let mut app = App::new(MealType::Breakfast);
        assert!(app.dispatch(Action::Quit));
    }
}
