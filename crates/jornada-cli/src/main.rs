mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use jornada_csv::{CsvTeamSource, TeamSource};
use tracing::info;

use crate::report::TeamReport;

#[derive(Parser)]
#[command(
    name = "jornada",
    about = "Report remaining working days for a team"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report of working days for team members
    #[command(visible_alias = "member:report")]
    Report {
        /// The end date to calculate the report to (YYYY-MM-DD)
        end_date: NaiveDate,

        /// A list of people on the project, one per line
        people: PathBuf,

        /// Booked PTO CSV with columns person,day
        #[arg(short, long)]
        booked_pto: Option<PathBuf>,

        /// Owed PTO CSV with columns person,type,days
        #[arg(short, long)]
        owed_pto: Option<PathBuf>,

        /// The start date to calculate the report from (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start_date: Option<NaiveDate>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn run_report(
    source: &dyn TeamSource,
    start: NaiveDate,
    end: NaiveDate,
    format: &str,
) -> Result<String> {
    let team = source
        .load()
        .with_context(|| format!("failed to load team from {}", source.name()))?;
    info!("Reporting on {} member(s) from {start} to {end}", team.len());
    TeamReport::build(&team, start, end)?.render(format)
}

fn cmd_report(
    end: NaiveDate,
    people: &Path,
    booked_pto: Option<&Path>,
    owed_pto: Option<&Path>,
    start: NaiveDate,
    format: &str,
) -> Result<()> {
    let mut source = CsvTeamSource::new(people);
    if let Some(path) = booked_pto {
        source = source.with_booked_pto(path);
    }
    if let Some(path) = owed_pto {
        source = source.with_owed_pto(path);
    }
    print!("{}", run_report(&source, start, end, format)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    match &cli.command {
        Commands::Report {
            end_date,
            people,
            booked_pto,
            owed_pto,
            start_date,
            format,
        } => {
            let start = start_date.unwrap_or_else(|| chrono::Local::now().date_naive());
            cmd_report(
                *end_date,
                people,
                booked_pto.as_deref(),
                owed_pto.as_deref(),
                start,
                format,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    struct Fixtures {
        _dir: tempfile::TempDir,
        people: PathBuf,
        booked: PathBuf,
        owed: PathBuf,
    }

    fn single() -> Fixtures {
        let dir = tempfile::tempdir().unwrap();
        let people = write(dir.path(), "people.csv", "andrew\n");
        let booked = write(dir.path(), "booked-pto.csv", "person,day\nandrew,2020-12-02\n");
        let owed = write(
            dir.path(),
            "owed-pto.csv",
            "person,type,days\nandrew,Statutory Holiday,2\n",
        );
        Fixtures {
            _dir: dir,
            people,
            booked,
            owed,
        }
    }

    #[test]
    fn parse_report_args() {
        let cli = Cli::try_parse_from([
            "jornada",
            "report",
            "--start-date=2020-12-01",
            "-b",
            "booked.csv",
            "-o",
            "owed.csv",
            "2020-12-31",
            "people.csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Report {
                end_date,
                people,
                booked_pto,
                owed_pto,
                start_date,
                format,
            } => {
                assert_eq!(end_date, date(2020, 12, 31));
                assert_eq!(people, PathBuf::from("people.csv"));
                assert_eq!(booked_pto, Some(PathBuf::from("booked.csv")));
                assert_eq!(owed_pto, Some(PathBuf::from("owed.csv")));
                assert_eq!(start_date, Some(date(2020, 12, 1)));
                assert_eq!(format, "text");
            }
        }
    }

    #[test]
    fn parse_report_defaults() {
        let cli =
            Cli::try_parse_from(["jornada", "member:report", "2020-12-31", "people.csv"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Report {
                booked_pto,
                owed_pto,
                start_date,
                ..
            } => {
                assert!(booked_pto.is_none());
                assert!(owed_pto.is_none());
                assert!(start_date.is_none());
            }
        }
    }

    #[test]
    fn parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["jornada", "report", "31/12/2020", "people.csv"]).is_err());
    }

    #[test]
    fn report_without_pto() {
        let f = single();
        let source = CsvTeamSource::new(&f.people);
        let out = run_report(&source, date(2020, 12, 1), date(2020, 12, 31), "text").unwrap();
        assert_eq!(
            out,
            "Team business days: 23\n\
             andrew has 23 business days remaining, 23 working days remaining, finishing on 2020-12-31.\n\
             Total team working days: 23\n"
        );
    }

    #[test]
    fn report_with_booked_pto() {
        let f = single();
        let source = CsvTeamSource::new(&f.people).with_booked_pto(&f.booked);
        let out = run_report(&source, date(2020, 12, 1), date(2020, 12, 31), "text").unwrap();
        assert_eq!(
            out,
            "Team business days: 23\n\
             andrew has 23 business days remaining, 22 working days remaining, finishing on 2020-12-31.\n\
             Total team working days: 22\n"
        );
    }

    #[test]
    fn report_with_owed_pto() {
        let f = single();
        let source = CsvTeamSource::new(&f.people).with_owed_pto(&f.owed);
        let out = run_report(&source, date(2020, 11, 30), date(2020, 12, 31), "text").unwrap();
        assert_eq!(
            out,
            "Team business days: 24\n\
             andrew has 24 business days remaining, 22 working days remaining, finishing on 2020-12-29.\n\
             Total team working days: 22\n"
        );
    }

    #[test]
    fn report_multiple_team_members() {
        let dir = tempfile::tempdir().unwrap();
        let people = write(dir.path(), "people.csv", "andrew\namanda\nharry\nzoe\n");
        let booked = write(
            dir.path(),
            "booked-pto.csv",
            "person,day\n\
             andrew,2020-12-02\n\
             amanda,2020-12-14\n\
             amanda,2020-12-15\n\
             amanda,2020-12-16\n\
             harry,2020-12-24\n\
             zoe,2020-12-30\n",
        );
        let source = CsvTeamSource::new(&people).with_booked_pto(&booked);
        let out = run_report(&source, date(2020, 11, 30), date(2020, 12, 31), "text").unwrap();
        assert_eq!(
            out,
            "Team business days: 96\n\
             andrew has 24 business days remaining, 23 working days remaining, finishing on 2020-12-31.\n\
             amanda has 24 business days remaining, 21 working days remaining, finishing on 2020-12-31.\n\
             harry has 24 business days remaining, 23 working days remaining, finishing on 2020-12-31.\n\
             zoe has 24 business days remaining, 23 working days remaining, finishing on 2020-12-31.\n\
             Total team working days: 90\n"
        );
    }

    #[test]
    fn report_as_json() {
        let f = single();
        let source = CsvTeamSource::new(&f.people).with_owed_pto(&f.owed);
        let out = run_report(&source, date(2020, 11, 30), date(2020, 12, 31), "json").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["members"][0]["working_days"], 22);
    }

    #[test]
    fn report_missing_people_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvTeamSource::new(dir.path().join("people.csv"));
        let err = run_report(&source, date(2020, 11, 30), date(2020, 12, 31), "text").unwrap_err();
        assert!(format!("{err:#}").contains("does not exist or is not readable"));
    }
}
