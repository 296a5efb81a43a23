//! Configuration module for the price-scope application.

// Can be private because we have a public re-export.
mod sources;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use sources::{HistorySourceConfig, ModelSourceConfig, SOURCES, SourcesConfig};
