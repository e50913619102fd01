use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Remaining working days for one team member.
///
/// `end_date` is the projected last working day once owed holidays are taken,
/// not necessarily the end of the queried range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysResult {
    id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    working_days: i64,
    business_days: i64,
}

impl WorkingDaysResult {
    pub fn new(
        id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        working_days: i64,
        business_days: i64,
    ) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
            working_days,
            business_days,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn working_days(&self) -> i64 {
        self.working_days
    }

    pub fn business_days(&self) -> i64 {
        self.business_days
    }
}

impl fmt::Display for WorkingDaysResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has {} business days remaining, {} working days remaining, finishing on {}.",
            self.id,
            self.business_days,
            self.working_days,
            self.end_date.format("%Y-%m-%d")
        )
    }
}
