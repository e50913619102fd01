use std::io::{BufRead, BufReader, Read};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use indexmap::IndexMap;
use jornada_core::{TeamCalculator, WorkingDaysCalculator};
use tracing::debug;

use crate::error::LoadError;

const BOOKED_PTO: &str = "booked PTO";
const OWED_PTO: &str = "owed PTO";

/// Builds a [`TeamCalculator`] from a people list and PTO CSVs.
///
/// The people list has one person per line and no header. The booked PTO CSV
/// holds holidays already on the calendar:
///
/// ```text
/// person,day
/// andrew,2020-12-02
/// ```
///
/// The owed PTO CSV holds time off that still has to be taken. `type` is free
/// text and only there for the reader's benefit; `days` accumulate per person:
///
/// ```text
/// person,type,days
/// andrew,Statutory Holiday,3
/// ```
///
/// Anyone mentioned in any input gets a calculator, in the order first seen.
#[derive(Debug, Default)]
pub struct TeamCsvLoader {
    calculators: IndexMap<String, WorkingDaysCalculator>,
}

impl TeamCsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a list of people, one per line. Blank lines are skipped.
    pub fn read_people(&mut self, reader: impl Read) -> Result<&mut Self, LoadError> {
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let person = line.trim();
            if !person.is_empty() {
                self.person(person);
            }
        }
        debug!(people = self.calculators.len(), "read people");
        Ok(self)
    }

    /// Read booked PTO rows of `person,day`.
    pub fn read_booked_pto(&mut self, reader: impl Read) -> Result<&mut Self, LoadError> {
        let mut rows = 0;
        for record in csv_reader(reader).records() {
            let record = record?;
            let line = line_number(&record);
            let person = column(&record, 0, BOOKED_PTO, line, "person")?;
            let day = column(&record, 1, BOOKED_PTO, line, "day")?;
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| {
                LoadError::InvalidDate {
                    file: BOOKED_PTO,
                    line,
                    value: day.to_string(),
                }
            })?;
            self.person(person).add_holiday(date);
            rows += 1;
        }
        debug!(rows, "read booked PTO");
        Ok(self)
    }

    /// Read owed PTO rows of `person,type,days`.
    pub fn read_owed_pto(&mut self, reader: impl Read) -> Result<&mut Self, LoadError> {
        let mut rows = 0;
        for record in csv_reader(reader).records() {
            let record = record?;
            let line = line_number(&record);
            let person = column(&record, 0, OWED_PTO, line, "person")?;
            let days = column(&record, 2, OWED_PTO, line, "days")?;
            let days: u32 = days.parse().map_err(|_| LoadError::InvalidDays {
                file: OWED_PTO,
                line,
                value: days.to_string(),
            })?;
            self.person(person).add_unbooked_holiday_days(days);
            rows += 1;
        }
        debug!(rows, "read owed PTO");
        Ok(self)
    }

    pub fn build(self) -> TeamCalculator {
        let mut team = TeamCalculator::new();
        for (id, calculator) in self.calculators {
            team.add_calculator(id, calculator);
        }
        team
    }

    fn person(&mut self, id: &str) -> &mut WorkingDaysCalculator {
        self.calculators.entry(id.to_string()).or_default()
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn line_number(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn column<'r>(
    record: &'r StringRecord,
    index: usize,
    file: &'static str,
    line: u64,
    name: &'static str,
) -> Result<&'r str, LoadError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LoadError::MissingColumn {
            file,
            line,
            column: name,
        }),
    }
}
