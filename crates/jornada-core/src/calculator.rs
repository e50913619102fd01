use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar;
use crate::error::WorkingDaysError;

/// Calculates working days for one person, based on a typical five day
/// working week plus that person's holidays.
///
/// Holidays come in two forms: booked holidays, which fall on known dates, and
/// unbooked holiday days, which are owed but not yet scheduled. Unbooked days
/// are subtracted as a flat count from working days, and are assumed to be
/// taken at the end of a range when projecting the last working day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingDaysCalculator {
    holidays: BTreeSet<NaiveDate>,
    unbooked_holiday_days: u32,
}

impl WorkingDaysCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all booked holidays.
    pub fn set_holidays(&mut self, holidays: impl IntoIterator<Item = NaiveDate>) {
        self.holidays = holidays.into_iter().collect();
    }

    /// Add a booked holiday. Adding the same date twice has no further effect.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    /// Add owed holiday days that have no date yet. Repeated calls accumulate.
    pub fn add_unbooked_holiday_days(&mut self, days: u32) {
        self.unbooked_holiday_days = self.unbooked_holiday_days.saturating_add(days);
    }

    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    pub fn unbooked_holiday_days(&self) -> u32 {
        self.unbooked_holiday_days
    }

    /// Booked holidays plus unbooked holiday days.
    pub fn get_total_holidays(&self) -> usize {
        self.holidays.len() + self.unbooked_holiday_days as usize
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        calendar::is_weekend(date)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// A working day is neither a weekend day nor a booked holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Working days in [start, end], inclusive of both dates, less any
    /// unbooked holiday days.
    ///
    /// The unbooked days are a flat deduction, so the result can be negative
    /// when more time is owed than the range holds.
    pub fn get_working_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64, WorkingDaysError> {
        let mut days = period_length(start, end)?;
        for date in calendar::days_inclusive(start, end) {
            if !self.is_working_day(date) {
                days -= 1;
            }
        }
        Ok(days - i64::from(self.unbooked_holiday_days))
    }

    /// Business days in [start, end], inclusive of both dates.
    ///
    /// Only weekends are excluded, so this is never less than the working days
    /// of the same range.
    pub fn get_business_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64, WorkingDaysError> {
        let mut days = period_length(start, end)?;
        for date in calendar::days_inclusive(start, end) {
            if self.is_weekend(date) {
                days -= 1;
            }
        }
        Ok(days)
    }

    /// Advance `days` working days from `date`. The starting date is never
    /// counted, and weekends and holidays are stepped over.
    pub fn add_days(&self, date: NaiveDate, days: u32) -> Result<NaiveDate, WorkingDaysError> {
        if days == 0 {
            return Ok(date);
        }
        date.iter_days()
            .skip(1)
            .filter(|d| self.is_working_day(*d))
            .nth(days as usize - 1)
            .ok_or(WorkingDaysError::OutOfRange(date))
    }

    /// The day work actually finishes between `start` and `end`, once the
    /// unbooked holiday days have been taken.
    ///
    /// Unbooked days are taken back to back at the end of the range, stepping
    /// over weekends and booked holidays without using up an unbooked day on
    /// them. Owed time that does not fit stops at `start`.
    pub fn get_last_day(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<NaiveDate, WorkingDaysError> {
        if !self.is_working_day(start) {
            return Err(WorkingDaysError::InvalidArgument(format!(
                "The start date {start} must not be a weekend or holiday"
            )));
        }
        if !self.is_working_day(end) {
            return Err(WorkingDaysError::InvalidArgument(format!(
                "The end date {end} must not be a weekend or holiday"
            )));
        }
        if (end - start).num_days() < 1 {
            return Err(WorkingDaysError::InvalidArgument(
                "There must be at least 2 days inclusive of the start and end date".to_string(),
            ));
        }

        let mut last = end;
        let mut taken = 0;
        while taken < self.unbooked_holiday_days && last > start {
            last = previous_day(last);
            while last > start && !self.is_working_day(last) {
                last = previous_day(last);
            }
            taken += 1;
        }
        if taken < self.unbooked_holiday_days {
            debug!(
                owed = self.unbooked_holiday_days,
                taken, %start, %end,
                "unbooked holidays exceed the range, stopping at the start date"
            );
        }

        Ok(calendar::days_inclusive(start, last)
            .filter(|d| self.is_working_day(*d))
            .last()
            .unwrap_or(start))
    }
}

/// Calendar days in [start, end], rejecting reversed ranges.
fn period_length(start: NaiveDate, end: NaiveDate) -> Result<i64, WorkingDaysError> {
    if end < start {
        return Err(WorkingDaysError::InvalidRange { start, end });
    }
    Ok(calendar::inclusive_day_count(start, end))
}

// Only called with a date after some other valid date, so a predecessor exists.
fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}
