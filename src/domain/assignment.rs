//! Meal Assignment Entity
//!
//! One scheduled use of a pantry item on a date and meal slot. Carries a
//! denormalized copy of the item's display fields, captured at assignment
//! time, so the grid never joins back to the pantry.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::MealType;

/// A scheduled meal (matches the remote service's wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealAssignment {
    /// Server-assigned identifier; negative while a local placeholder
    pub id: i64,
    pub date: NaiveDate,
    /// Derived label, e.g. "MONDAY"
    pub day_of_week: String,
    pub meal_type: MealType,
    pub item_type: String,
    pub item_name: String,
    pub item_colour: String,
    /// Unit price captured from the pantry item; never negative
    pub item_price: f64,
}

/// Uppercase weekday label used on the wire and in day headers
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_label() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(weekday_label(d), "FRIDAY");
        assert_eq!(weekday_label(d.succ_opt().unwrap()), "SATURDAY");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let a = MealAssignment {
            id: 7,
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            day_of_week: "SUNDAY".to_string(),
            meal_type: MealType::Breakfast,
            item_type: "GRAIN".to_string(),
            item_name: "Oats".to_string(),
            item_colour: "#ffcc00".to_string(),
            item_price: 1.25,
        };
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["date"], "2025-01-05");
        assert_eq!(json["mealType"], "BREAKFAST");
        assert_eq!(json["itemName"], "Oats");
        assert_eq!(json["dayOfWeek"], "SUNDAY");
    }
}
