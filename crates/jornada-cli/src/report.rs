use anyhow::{Context, Result};
use chrono::NaiveDate;
use jornada_core::{TeamCalculator, WorkingDaysResult};
use serde::Serialize;

/// Everything a report prints: team totals plus one result per member.
#[derive(Debug, Serialize)]
pub struct TeamReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub business_days: i64,
    pub working_days: i64,
    pub members: Vec<WorkingDaysResult>,
}

impl TeamReport {
    pub fn build(team: &TeamCalculator, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Ok(Self {
            start_date: start,
            end_date: end,
            business_days: team
                .get_business_days(start, end)
                .context("failed to count team business days")?,
            members: team
                .get_individual_results(start, end)
                .context("failed to calculate individual results")?,
            working_days: team
                .get_working_days(start, end)
                .context("failed to count team working days")?,
        })
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("Team business days: {}\n", self.business_days);
        for member in &self.members {
            out.push_str(&format!("{member}\n"));
        }
        out.push_str(&format!("Total team working days: {}\n", self.working_days));
        out
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        json.push('\n');
        Ok(json)
    }

    pub fn render(&self, format: &str) -> Result<String> {
        match format {
            "text" => Ok(self.to_text()),
            "json" => self.to_json(),
            other => anyhow::bail!("unknown format: {other}. Expected: text, json"),
        }
    }
}
