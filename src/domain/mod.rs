// Domain types and value objects
mod diagnostics;
mod frequency;
mod series;

// Re-export commonly used types to the world
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use frequency::Frequency;
pub use series::{CleanSeries, DatedValues, ForecastSeries};
