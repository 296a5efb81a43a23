//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub historical_color: Color32,
    pub forecast_color: Color32,
    /// Vertical separator marking the historical/forecast boundary
    pub separator_color: Color32,
    pub historical_line_width: f32,
    pub forecast_line_width: f32,
    pub separator_line_width: f32,
    /// Dash length for the forecast and separator lines
    pub dash_length: f32,

    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    /// Padded windows narrower than this are treated as flat data
    pub min_span_abs: f64,
    /// Absolute half-window used for flat data (mean ± this)
    pub flat_half_window: f64,
    /// Multiplicative fallback applied to min/max when the mean window
    /// is itself non-finite
    pub pct_fallback: f64,

    /// Plot x axis divisions (split axis into n equal parts)
    pub plot_axis_divisions: u32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    historical_color: Color32::from_rgb(66, 133, 244), // Solid blue
    forecast_color: Color32::from_rgb(239, 83, 80),    // TradingView Red
    separator_color: Color32::from_gray(140),          // Subtle vertical separator line on plot

    historical_line_width: 1.5,
    forecast_line_width: 2.0,
    separator_line_width: 1.0,
    dash_length: 6.0,

    plot_y_padding_pct: 0.05,
    min_span_abs: 1.0,
    flat_half_window: 50.0,
    pct_fallback: 0.05,

    plot_axis_divisions: 8,
};
