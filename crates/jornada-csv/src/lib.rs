pub mod error;
pub mod loader;
pub mod source;

pub use error::LoadError;
pub use loader::TeamCsvLoader;
pub use source::{CsvTeamSource, TeamSource};
