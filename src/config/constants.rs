// Top Level Constants
pub const FORECAST_STEPS: usize = 7; // Number of future periods to forecast (a week of daily data)

pub mod history {
    /// Shape of the provider CSV export: one header row, then this many
    /// metadata rows carrying no price data. Always discarded.
    pub const METADATA_ROWS: usize = 2;

    /// Header name of the price column.
    pub const CLOSE_COLUMN: &str = "Close";

    /// The date index is always the first column, whatever its header says.
    pub const DATE_COLUMN_INDEX: usize = 0;

    /// Cap on the cleaned history, counted from the start of the series.
    /// Guards against inputs larger than the window the persisted model was
    /// trained on.
    pub const MAX_ROWS: usize = 2146;

    /// How many trailing historical points the zoomed second chart shows.
    pub const SLICE_LEN: usize = 30;
}
