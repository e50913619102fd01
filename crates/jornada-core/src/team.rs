use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::calculator::WorkingDaysCalculator;
use crate::error::WorkingDaysError;
use crate::result::WorkingDaysResult;

/// Working days across a whole team.
///
/// Each member has their own calculator, so booked time off and regional
/// holidays can differ from person to person. Members are kept in the order
/// they were first added.
#[derive(Debug, Clone, Default)]
pub struct TeamCalculator {
    calculators: IndexMap<String, WorkingDaysCalculator>,
}

impl TeamCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member's calculator. Adding an existing id replaces that member's
    /// calculator in place.
    pub fn add_calculator(&mut self, id: impl Into<String>, calculator: WorkingDaysCalculator) {
        self.calculators.insert(id.into(), calculator);
    }

    pub fn calculator(&self, id: &str) -> Option<&WorkingDaysCalculator> {
        self.calculators.get(id)
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// Sum of every member's working days.
    pub fn get_working_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64, WorkingDaysError> {
        self.calculators
            .values()
            .map(|calculator| calculator.get_working_days(start, end))
            .sum()
    }

    /// Sum of every member's business days.
    pub fn get_business_days(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<i64, WorkingDaysError> {
        self.calculators
            .values()
            .map(|calculator| calculator.get_business_days(start, end))
            .sum()
    }

    /// One result per member, in registration order. The first member that
    /// fails aborts the whole query.
    pub fn get_individual_results(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WorkingDaysResult>, WorkingDaysError> {
        self.calculators
            .iter()
            .map(|(id, calculator)| {
                let last = calculator.get_last_day(start, end)?;
                let working_days = calculator.get_working_days(start, end)?;
                let business_days = calculator.get_business_days(start, end)?;
                Ok(WorkingDaysResult::new(
                    id.clone(),
                    start,
                    last,
                    working_days,
                    business_days,
                ))
            })
            .collect()
    }
}
