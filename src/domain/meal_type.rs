//! Meal Slot Types
//!
//! The fixed set of daily slots an assignment can occupy.

use serde::{Deserialize, Serialize};

/// One of the fixed daily meal slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Row order used by the calendar grid
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
            MealType::Snack => "SNACK",
        }
    }

    /// Parse a wire tag. Unknown tags are rejected, never coerced.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BREAKFAST" => Some(MealType::Breakfast),
            "LUNCH" => Some(MealType::Lunch),
            "DINNER" => Some(MealType::Dinner),
            "SNACK" => Some(MealType::Snack),
            _ => None,
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tags_round_trip() {
        for mt in MealType::ALL {
            assert_eq!(MealType::parse(mt.as_str()), Some(mt));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(MealType::parse("BRUNCH"), None);
        assert_eq!(MealType::parse(""), None);
    }

    #[test]
    fn test_serde_uses_uppercase_tags() {
        let json = serde_json::to_string(&MealType::Lunch).unwrap();
        assert_eq!(json, "\"LUNCH\"");
        let back: MealType = serde_json::from_str("\"SNACK\"").unwrap();
        assert_eq!(back, MealType::Snack);
    }
}
