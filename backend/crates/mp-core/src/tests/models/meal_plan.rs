use crate::{MealPlan, week_start_for};

use chrono::NaiveDate;
use uuid::Uuid;

#[test]
fn test_week_start_for_midweek_date() {
    // 2024-03-13 is a Wednesday
    let date = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
    assert_eq!(
        week_start_for(date),
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    );
}

#[test]
fn test_week_start_for_sunday_is_identity() {
    let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    assert_eq!(week_start_for(sunday), sunday);
}

#[test]
fn test_meal_plan_new() {
    let user_id = Uuid::new_v4();
    let week = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let plan = MealPlan::new(user_id, week);

    assert_eq!(plan.user_id, user_id);
    assert_eq!(plan.week_starting, week);
}
