mod meal;
mod meal_type;

pub use meal::Meal;
pub use meal_type::MealType;
