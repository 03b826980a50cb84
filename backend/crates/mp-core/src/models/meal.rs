use crate::{CoreError, CoreResult, MealType};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_DAY_OF_WEEK: i64 = 0;
pub const MAX_DAY_OF_WEEK: i64 = 6;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One scheduled (day, meal type, recipe) slot in a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    pub meal_type: MealType,
    /// Free text such as "7:00 PM"
    pub scheduled_time: Option<String>,
}

impl Meal {
    #[track_caller]
    pub fn new(
        meal_plan_id: Uuid,
        recipe_id: Uuid,
        day_of_week: i64,
        meal_type: MealType,
    ) -> CoreResult<Self> {
        if !(MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK).contains(&day_of_week) {
            return Err(CoreError::InvalidDayOfWeek {
                value: day_of_week,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            meal_plan_id,
            recipe_id,
            day_of_week: day_of_week as u8,
            meal_type,
            scheduled_time: None,
        })
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[usize::from(self.day_of_week) % DAY_NAMES.len()]
    }
}
