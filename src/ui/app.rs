use {
    crate::{
        Cli,
        config::{SOURCES, constants::history, plot::PLOT_CONFIG},
        data,
        domain::{CleanSeries, DatedValues, Diagnostics, ForecastSeries},
        forecast::{self, ForecastModel},
        ui::DisplayRange,
        utils::{TimeUtils, finite_min_max},
    },
    eframe::{
        Frame,
        egui::{CentralPanel, Context, Ui, Vec2b},
    },
    egui_plot::{
        Axis, AxisHints, GridMark, Legend, Line, LineStyle, Plot, PlotPoints, PlotUi, VPlacement,
    },
    std::path::PathBuf,
};

/// The one-shot report: the whole pipeline runs in [`App::new`], the egui
/// loop only redraws what was computed.
pub struct App {
    history: CleanSeries,
    recent: CleanSeries,
    forecast: ForecastSeries,
    full_range: Option<DisplayRange>,
    recent_range: Option<DisplayRange>,
    steps: usize,
    diagnostics: Diagnostics,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let model_path = args
            .model
            .clone()
            .unwrap_or_else(|| PathBuf::from(SOURCES.model.path));
        let csv_path = args
            .csv
            .clone()
            .unwrap_or_else(|| PathBuf::from(SOURCES.history.path));

        let mut diagnostics = Diagnostics::new();

        let model_outcome = data::load_model(&model_path);
        diagnostics.absorb(model_outcome.diagnostics);

        let load_outcome = data::load(&csv_path);
        diagnostics.absorb(load_outcome.diagnostics);
        let history = load_outcome.series;

        let forecast_outcome = forecast::forecast(
            model_outcome.model.as_ref().map(|m| m as &dyn ForecastModel),
            args.steps,
            &history,
        );
        diagnostics.absorb(forecast_outcome.diagnostics);
        let forecast = forecast_outcome.series;

        let recent = history.tail(history::SLICE_LEN);

        // Ranges are fixed per report; only computed when something is
        // plottable at all.
        let (full_range, recent_range) = if history.is_empty() && forecast.is_empty() {
            (None, None)
        } else {
            (
                DisplayRange::for_series(&history, &forecast, &mut diagnostics),
                DisplayRange::for_series(&recent, &forecast, &mut diagnostics),
            )
        };

        diagnostics.log_all();

        Self {
            history,
            recent,
            forecast,
            full_range,
            recent_range,
            steps: args.steps,
            diagnostics,
        }
    }

    fn chart(
        &self,
        ui: &mut Ui,
        id: &str,
        title: String,
        historical_label: String,
        historical: &CleanSeries,
        range: Option<DisplayRange>,
        height: f32,
    ) {
        ui.heading(title);

        Plot::new(id)
            .height(height)
            .custom_x_axes(vec![date_axis()])
            .x_grid_spacer(date_grid_spacer)
            .legend(Legend::default())
            .allow_scroll(false)
            .allow_drag(Vec2b { x: true, y: false })
            .show(ui, |plot_ui| {
                if let Some(range) = range {
                    plot_ui.set_plot_bounds_y(range.lower..=range.upper);
                }

                if !historical.is_empty() {
                    plot_ui.line(
                        series_line(historical, historical_label)
                            .color(PLOT_CONFIG.historical_color)
                            .width(PLOT_CONFIG.historical_line_width),
                    );
                    draw_boundary_separator(plot_ui, historical, &self.forecast, range);
                }

                if !self.forecast.is_empty() {
                    plot_ui.line(
                        series_line(&self.forecast, format!("Forecast ({} steps)", self.steps))
                            .color(PLOT_CONFIG.forecast_color)
                            .width(PLOT_CONFIG.forecast_line_width)
                            .style(LineStyle::Dashed {
                                length: PLOT_CONFIG.dash_length,
                            }),
                    );
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            if self.history.is_empty() && self.forecast.is_empty() {
                ui.heading("No historical data to plot or forecast available.");
                for d in self.diagnostics.iter() {
                    ui.label(&d.message);
                }
                return;
            }

            let chart_height = (ui.available_height() - 80.0) / 2.0;

            self.chart(
                ui,
                "full_history",
                format!("Close Price: Full History and {}-Step Forecast", self.steps),
                format!("Full Historical Price ({} days)", self.history.len()),
                &self.history,
                self.full_range,
                chart_height,
            );

            ui.separator();

            self.chart(
                ui,
                "recent_history",
                format!(
                    "Close Price: Last {} Days History and {}-Step Forecast",
                    self.recent.len(),
                    self.steps
                ),
                format!("Historical Price (Last {} days)", self.recent.len()),
                &self.recent,
                self.recent_range,
                chart_height,
            );
        });
    }
}

fn series_line(series: &dyn DatedValues, name: String) -> Line<'static> {
    let points: Vec<[f64; 2]> = series
        .dates()
        .iter()
        .zip(series.values())
        .map(|(&date, &value)| [TimeUtils::date_to_x(date), value])
        .collect();
    Line::new(name, PlotPoints::new(points))
}

/// Dashed vertical line at the historical/forecast boundary, overshooting the
/// visible bounds so it always reads as an infinite separator.
fn draw_boundary_separator(
    plot_ui: &mut PlotUi,
    historical: &CleanSeries,
    forecast: &ForecastSeries,
    range: Option<DisplayRange>,
) {
    let Some(last_date) = historical.last_date() else {
        return;
    };
    let x = TimeUtils::date_to_x(last_date);

    let (y_min, y_max) = match range {
        Some(r) => (r.lower, r.upper),
        None => {
            let combined: Vec<f64> = historical
                .values()
                .iter()
                .chain(forecast.values())
                .copied()
                .collect();
            match finite_min_max(&combined) {
                Some(bounds) => bounds,
                None => return,
            }
        }
    };
    let span = y_max - y_min;

    plot_ui.line(
        Line::new(
            "End of Historical Data",
            PlotPoints::new(vec![[x, y_min - span], [x, y_max + span]]),
        )
        .color(PLOT_CONFIG.separator_color)
        .width(PLOT_CONFIG.separator_line_width)
        .style(LineStyle::Dashed {
            length: PLOT_CONFIG.dash_length,
        }),
    );
}

fn date_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label("Date")
        .formatter(|mark, _range| {
            TimeUtils::x_to_date(mark.value)
                .map(TimeUtils::format_date)
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

// Whole-day grid marks with a human-friendly step (1, 2, 5, 10, 20, 50... days).
fn date_grid_spacer(input: egui_plot::GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = adaptive_day_step(max - min, PLOT_CONFIG.plot_axis_divisions as f64);

    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;

    let mut marks = Vec::new();
    for i in start..=end {
        marks.push(GridMark {
            value: i as f64 * step,
            step_size: step,
        });
    }
    marks
}

fn adaptive_day_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 1.0 {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    (nice_step * mag).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_step_snaps_to_nice_values() {
        assert_eq!(adaptive_day_step(8.0, 8.0), 1.0);
        assert_eq!(adaptive_day_step(80.0, 8.0), 10.0);
        assert_eq!(adaptive_day_step(400.0, 8.0), 50.0);
        assert_eq!(adaptive_day_step(2000.0, 8.0), 200.0);
    }
}
