use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal slot for a planned item. Closed set; records always carry one of
/// these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All slots in display order: breakfast, lunch, dinner, snack.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Lowercase token used for parsing, serialization and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Human-readable label shown in the list headings and notices.
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast meal",
            MealType::Lunch => "lunch meal",
            MealType::Dinner => "dinner meal",
            MealType::Snack => "snack",
        }
    }

    /// Next slot in display order, wrapping from snack back to breakfast.
    pub fn next(&self) -> MealType {
        match self {
            MealType::Breakfast => MealType::Lunch,
            MealType::Lunch => MealType::Dinner,
            MealType::Dinner => MealType::Snack,
            MealType::Snack => MealType::Breakfast,
        }
    }

    /// Previous slot in display order, wrapping from breakfast to snack.
    pub fn prev(&self) -> MealType {
        match self {
            MealType::Breakfast => MealType::Snack,
            MealType::Lunch => MealType::Breakfast,
            MealType::Dinner => MealType::Lunch,
            MealType::Snack => MealType::Dinner,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(format!(
                "unknown meal type '{}' (expected breakfast, lunch, dinner or snack)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_token() {
        for meal_type in MealType::ALL {
            assert_eq!(format!("{}", meal_type), meal_type.as_str());
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            MealType::from_str("breakfast").unwrap(),
            MealType::Breakfast
        );
        assert_eq!(MealType::from_str("LUNCH").unwrap(), MealType::Lunch);
        assert_eq!(MealType::from_str("Dinner").unwrap(), MealType::Dinner);
        assert_eq!(MealType::from_str("snack").unwrap(), MealType::Snack);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(MealType::from_str("brunch").is_err());
        assert!(MealType::from_str("").is_err());
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(MealType::Breakfast.label(), "breakfast meal");
        assert_eq!(MealType::Lunch.label(), "lunch meal");
        assert_eq!(MealType::Dinner.label(), "dinner meal");
        assert_eq!(MealType::Snack.label(), "snack");
    }

    #[test]
    fn test_next_cycles_all_slots() {
        let mut seen = vec![MealType::Breakfast];
        let mut current = MealType::Breakfast;
        for _ in 0..3 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen, MealType::ALL.to_vec());
        assert_eq!(current.next(), MealType::Breakfast);
    }

    #[test]
    fn test_prev_inverts_next() {
        for meal_type in MealType::ALL {
            assert_eq!(meal_type.next().prev(), meal_type);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&MealType::Dinner).unwrap();
        assert_eq!(json, "\"dinner\"");

        let parsed: MealType = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(parsed, MealType::Snack);
    }
}
