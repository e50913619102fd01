pub mod calculator;
pub mod calendar;
pub mod error;
pub mod result;
pub mod team;

pub use calculator::WorkingDaysCalculator;
pub use error::WorkingDaysError;
pub use result::WorkingDaysResult;
pub use team::TeamCalculator;
