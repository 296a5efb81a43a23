//! Default input artifact locations

/// Configuration for the persisted model artifact
pub struct ModelSourceConfig {
    /// Path to the bincode-serialized fitted model
    pub path: &'static str,
}

/// Configuration for the historical price CSV
pub struct HistorySourceConfig {
    /// Path to the provider CSV export
    pub path: &'static str,
}

/// The Master Sources Configuration
pub struct SourcesConfig {
    pub model: ModelSourceConfig,
    pub history: HistorySourceConfig,
}

pub const SOURCES: SourcesConfig = SourcesConfig {
    model: ModelSourceConfig {
        path: "arima_model.bin",
    },
    history: HistorySourceConfig {
        path: "BTC-USD.csv",
    },
};
