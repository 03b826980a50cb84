use crate::MealType;

use std::str::FromStr;

#[test]
fn test_meal_type_from_str_is_case_insensitive() {
    assert_eq!(MealType::from_str("dinner").unwrap(), MealType::Dinner);
    assert_eq!(MealType::from_str("Breakfast").unwrap(), MealType::Breakfast);
    assert!(MealType::from_str("brunch").is_err());
}

#[test]
fn test_meal_type_serializes_lowercase() {
    let json = serde_json::to_string(&MealType::Snack).unwrap();
    assert_eq!(json, "\"snack\"");
}

#[test]
fn test_meal_type_for_hour() {
    assert_eq!(MealType::for_hour(7), MealType::Breakfast);
    assert_eq!(MealType::for_hour(12), MealType::Lunch);
    assert_eq!(MealType::for_hour(18), MealType::Dinner);
    assert_eq!(MealType::for_hour(23), MealType::Dinner);
}
