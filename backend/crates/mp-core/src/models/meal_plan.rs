//! Week-scoped meal plans.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Sunday that opens the planned week
    pub week_starting: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    pub fn new(user_id: Uuid, week_starting: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            week_starting,
            created_at: Utc::now(),
        }
    }
}

/// Sunday on or before `date`; day 0 of the meal plan week
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}
