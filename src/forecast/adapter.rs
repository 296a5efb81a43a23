//! Model forecast adapter.
//!
//! Normalizes whatever a [`ForecastModel`] hands back into a date-indexed
//! [`ForecastSeries`] anchored at the end of the historical series. The
//! availability policy is "degrade to nothing plottable": absent model, empty
//! anchor, failed prediction, unexpected shape, or an uninferable frequency
//! all produce an empty series plus a diagnostic, never a hard failure and
//! never a mis-dated index.

use {
    crate::{
        domain::{CleanSeries, DatedValues, Diagnostics, ForecastSeries, Frequency},
        forecast::{ForecastModel, ForecastOutput},
    },
    chrono::NaiveDate,
};

#[derive(Debug, Default)]
pub struct ForecastOutcome {
    pub series: ForecastSeries,
    pub diagnostics: Diagnostics,
}

pub fn forecast(
    model: Option<&dyn ForecastModel>,
    steps: usize,
    anchor: &CleanSeries,
) -> ForecastOutcome {
    let mut diagnostics = Diagnostics::new();

    let Some(model) = model else {
        diagnostics.warn("Model not loaded, skipping forecast");
        return empty(diagnostics);
    };
    if anchor.is_empty() {
        diagnostics.warn("Historical data is empty, cannot anchor a forecast");
        return empty(diagnostics);
    }

    let output = match model.predict(steps) {
        Ok(output) => output,
        Err(e) => {
            diagnostics.warn(format!("'{}' prediction failed: {e:#}", model.name()));
            return empty(diagnostics);
        }
    };

    let series = match output {
        ForecastOutput::Values(values) => {
            date_flat_values(values, steps, anchor, &mut diagnostics)
        }
        ForecastOutput::Dated(points) => accept_dated(points, &mut diagnostics),
    };
    ForecastOutcome {
        series,
        diagnostics,
    }
}

fn empty(diagnostics: Diagnostics) -> ForecastOutcome {
    ForecastOutcome {
        series: ForecastSeries::empty(),
        diagnostics,
    }
}

/// Flat numeric output: build `steps` dates at the anchor's inferred
/// frequency, starting the period immediately after its last date.
fn date_flat_values(
    values: Vec<f64>,
    steps: usize,
    anchor: &CleanSeries,
    diagnostics: &mut Diagnostics,
) -> ForecastSeries {
    if values.len() != steps {
        diagnostics.warn(format!(
            "Model returned {} values, expected {steps}; forecast suppressed",
            values.len()
        ));
        return ForecastSeries::empty();
    }
    if values.iter().any(|v| !v.is_finite()) {
        diagnostics.warn("Model returned non-finite values; forecast suppressed");
        return ForecastSeries::empty();
    }

    let Some(freq) = Frequency::infer(anchor.dates()) else {
        diagnostics.warn(
            "Could not infer a sampling frequency from the historical index; \
             forecast cannot be dated and will not be shown",
        );
        return ForecastSeries::empty();
    };
    let Some(last) = anchor.last_date() else {
        return ForecastSeries::empty();
    };

    let dates = freq.future_dates(last, steps);
    ForecastSeries::from_parts(dates, values, Some(freq))
}

/// Already-dated output: accept as-is, back-filling the frequency label when
/// it can be inferred.
fn accept_dated(
    points: Vec<(NaiveDate, f64)>,
    diagnostics: &mut Diagnostics,
) -> ForecastSeries {
    if points.iter().any(|(_, v)| !v.is_finite()) {
        diagnostics.warn("Model returned non-finite values; forecast suppressed");
        return ForecastSeries::empty();
    }
    let (dates, values): (Vec<_>, Vec<_>) = points.into_iter().unzip();
    let freq = Frequency::infer(&dates);
    ForecastSeries::from_parts(dates, values, freq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn daily_anchor(last: &str, len: usize) -> CleanSeries {
        let mut series = CleanSeries::new();
        let last = d(last);
        for i in (0..len).rev() {
            series.try_push(last - chrono::Duration::days(i as i64), 100.0 + i as f64);
        }
        series
    }

    /// Test double returning a canned output (or failing).
    struct Canned(Result<ForecastOutput>);

    impl ForecastModel for Canned {
        fn predict(&self, _steps: usize) -> Result<ForecastOutput> {
            match &self.0 {
                Ok(o) => Ok(o.clone()),
                Err(e) => Err(anyhow!("{e}")),
            }
        }
        fn name(&self) -> &str {
            "canned"
        }
    }

    #[test]
    fn flat_values_get_dates_following_the_anchor() {
        let anchor = daily_anchor("2024-01-10", 5);
        let model = Canned(Ok(ForecastOutput::Values(vec![1.0; 7])));

        let outcome = forecast(Some(&model), 7, &anchor);
        assert_eq!(outcome.series.len(), 7);
        assert_eq!(outcome.series.dates().first(), Some(&d("2024-01-11")));
        assert_eq!(outcome.series.dates().last(), Some(&d("2024-01-17")));
        assert_eq!(outcome.series.freq(), Some(Frequency::DAILY));
    }

    #[test]
    fn irregular_anchor_suppresses_the_forecast() {
        let mut anchor = CleanSeries::new();
        anchor.try_push(d("2024-01-01"), 1.0);
        anchor.try_push(d("2024-01-02"), 2.0);
        anchor.try_push(d("2024-01-05"), 3.0);
        let model = Canned(Ok(ForecastOutput::Values(vec![1.0; 7])));

        let outcome = forecast(Some(&model), 7, &anchor);
        assert!(outcome.series.is_empty());
        assert!(!outcome.diagnostics.is_empty());
    }

    #[test]
    fn absent_model_is_a_no_op() {
        let anchor = daily_anchor("2024-01-10", 5);
        let outcome = forecast(None, 7, &anchor);
        assert!(outcome.series.is_empty());
    }

    #[test]
    fn empty_anchor_is_a_no_op() {
        let model = Canned(Ok(ForecastOutput::Values(vec![1.0; 7])));
        let outcome = forecast(Some(&model), 7, &CleanSeries::new());
        assert!(outcome.series.is_empty());
    }

    #[test]
    fn wrong_length_output_is_suppressed() {
        let anchor = daily_anchor("2024-01-10", 5);
        let model = Canned(Ok(ForecastOutput::Values(vec![1.0; 3])));
        let outcome = forecast(Some(&model), 7, &anchor);
        assert!(outcome.series.is_empty());
        assert!(!outcome.diagnostics.is_empty());
    }

    #[test]
    fn prediction_error_degrades_to_empty() {
        let anchor = daily_anchor("2024-01-10", 5);
        let model = Canned(Err(anyhow!("numerical blow-up")));
        let outcome = forecast(Some(&model), 7, &anchor);
        assert!(outcome.series.is_empty());
        assert!(!outcome.diagnostics.is_empty());
    }

    #[test]
    fn dated_output_keeps_its_own_dates() {
        let anchor = daily_anchor("2024-01-10", 5);
        let points = vec![
            (d("2024-02-01"), 1.0),
            (d("2024-02-08"), 2.0),
            (d("2024-02-15"), 3.0),
        ];
        let model = Canned(Ok(ForecastOutput::Dated(points.clone())));

        let outcome = forecast(Some(&model), 3, &anchor);
        assert_eq!(outcome.series.len(), 3);
        assert_eq!(outcome.series.dates().first(), Some(&d("2024-02-01")));
        // Weekly spacing back-filled from the dated index itself.
        assert_eq!(outcome.series.freq().map(|f| f.days()), Some(7));
    }

    #[test]
    fn non_finite_values_are_suppressed() {
        let anchor = daily_anchor("2024-01-10", 5);
        let model = Canned(Ok(ForecastOutput::Values(vec![
            1.0,
            f64::NAN,
            3.0,
            4.0,
            5.0,
            6.0,
            7.0,
        ])));
        let outcome = forecast(Some(&model), 7, &anchor);
        assert!(outcome.series.is_empty());
    }
}
