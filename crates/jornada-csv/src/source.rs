use std::fs::File;
use std::path::{Path, PathBuf};

use jornada_core::TeamCalculator;
use tracing::info;

use crate::error::LoadError;
use crate::loader::TeamCsvLoader;

/// Trait for building a team from some external description of its members
/// and their time off.
pub trait TeamSource {
    /// Source name (for logging/display).
    fn name(&self) -> &str;

    /// Build a team with one calculator per person.
    fn load(&self) -> Result<TeamCalculator, LoadError>;
}

/// A team described by a people list plus optional booked and owed PTO CSVs.
#[derive(Debug, Clone)]
pub struct CsvTeamSource {
    people: PathBuf,
    booked_pto: Option<PathBuf>,
    owed_pto: Option<PathBuf>,
}

impl CsvTeamSource {
    pub fn new(people: impl AsRef<Path>) -> Self {
        Self {
            people: people.as_ref().to_path_buf(),
            booked_pto: None,
            owed_pto: None,
        }
    }

    pub fn with_booked_pto(mut self, path: impl AsRef<Path>) -> Self {
        self.booked_pto = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_owed_pto(mut self, path: impl AsRef<Path>) -> Self {
        self.owed_pto = Some(path.as_ref().to_path_buf());
        self
    }
}

impl TeamSource for CsvTeamSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<TeamCalculator, LoadError> {
        let mut loader = TeamCsvLoader::new();
        loader.read_people(open(&self.people)?)?;
        if let Some(path) = &self.booked_pto {
            loader.read_booked_pto(open(path)?)?;
        }
        if let Some(path) = &self.owed_pto {
            loader.read_owed_pto(open(path)?)?;
        }

        let team = loader.build();
        info!(
            "Loaded {} team member(s) from {}",
            team.len(),
            self.people.display()
        );
        Ok(team)
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            LoadError::NotFound(path.to_path_buf())
        }
        _ => LoadError::Io(e),
    })
}
