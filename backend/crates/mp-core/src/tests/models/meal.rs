use crate::{CoreError, Meal, MealType};

use uuid::Uuid;

#[test]
fn test_meal_new_accepts_full_week() {
    for day in 0..=6 {
        let meal = Meal::new(Uuid::new_v4(), Uuid::new_v4(), day, MealType::Dinner).unwrap();
        assert_eq!(i64::from(meal.day_of_week), day);
    }
}

#[test]
fn test_meal_new_rejects_out_of_range_day() {
    let result = Meal::new(Uuid::new_v4(), Uuid::new_v4(), 7, MealType::Lunch);
    assert!(matches!(
        result,
        Err(CoreError::InvalidDayOfWeek { value: 7, .. })
    ));

    let result = Meal::new(Uuid::new_v4(), Uuid::new_v4(), -1, MealType::Lunch);
    assert!(result.is_err());
}

#[test]
fn test_meal_day_name() {
    let meal = Meal::new(Uuid::new_v4(), Uuid::new_v4(), 0, MealType::Breakfast).unwrap();
    assert_eq!(meal.day_name(), "Sunday");

    let meal = Meal::new(Uuid::new_v4(), Uuid::new_v4(), 6, MealType::Breakfast).unwrap();
    assert_eq!(meal.day_name(), "Saturday");
}
