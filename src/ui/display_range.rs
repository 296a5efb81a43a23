//! Presentation range builder.
//!
//! Computes the y-axis window covering both the historical and forecast
//! series. Financial series can be flat, single-point, or pathological, so
//! the bounds fall back in tiers; the renderer must always receive finite,
//! distinct limits or `None` (autoscale).

use crate::{
    config::plot::PLOT_CONFIG,
    domain::{DatedValues, Diagnostics},
    utils::{finite_min_max, mean},
};

/// Finite y-axis bounds handed to the plot. `None` means autoscale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub lower: f64,
    pub upper: f64,
}

impl DisplayRange {
    /// Bounds covering every finite value of both series (either may be
    /// empty), padded by `plot_y_padding_pct` of the span.
    ///
    /// Tier 2: flat or near-flat data gets an absolute window around the
    /// mean. Tier 3: if that is still non-finite, a multiplicative window
    /// around min/max individually.
    pub fn for_series(
        a: &dyn DatedValues,
        b: &dyn DatedValues,
        diagnostics: &mut Diagnostics,
    ) -> Option<DisplayRange> {
        let combined: Vec<f64> = a
            .values()
            .iter()
            .chain(b.values())
            .copied()
            .filter(|v| v.is_finite())
            .collect();

        let Some((min, max)) = finite_min_max(&combined) else {
            diagnostics.warn("No finite values to derive display bounds from, autoscaling");
            return None;
        };

        let span = max - min;
        let (mut lower, mut upper) = if span > 0.0 {
            let buffer = span * PLOT_CONFIG.plot_y_padding_pct;
            (min - buffer, max + buffer)
        } else {
            // Zero span: force the fallback tiers below.
            (f64::NAN, f64::NAN)
        };

        // Negated comparison also catches NaN from the zero-span case.
        if !(upper - lower >= PLOT_CONFIG.min_span_abs) {
            let center = mean(&combined);
            lower = center - PLOT_CONFIG.flat_half_window;
            upper = center + PLOT_CONFIG.flat_half_window;
            if !lower.is_finite() || !upper.is_finite() {
                lower = min * (1.0 - PLOT_CONFIG.pct_fallback);
                upper = max * (1.0 + PLOT_CONFIG.pct_fallback);
            }
        }

        if lower.is_finite() && upper.is_finite() && lower < upper {
            Some(DisplayRange { lower, upper })
        } else {
            diagnostics.warn("Could not determine finite display bounds, autoscaling");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CleanSeries;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> CleanSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut s = CleanSeries::new();
        for (i, &v) in values.iter().enumerate() {
            s.try_push(start + chrono::Duration::days(i as i64), v);
        }
        s
    }

    #[test]
    fn pads_beyond_the_extremes() {
        let mut diags = Diagnostics::new();
        let a = series(&[10.0, 20.0, 30.0]);
        let b = series(&[25.0, 35.0]);

        let range = DisplayRange::for_series(&a, &b, &mut diags).unwrap();
        assert!(range.lower < 10.0);
        assert!(range.upper > 35.0);
        assert!(range.lower.is_finite() && range.upper.is_finite());
        assert!(diags.is_empty());
    }

    #[test]
    fn flat_series_gets_an_absolute_window() {
        let mut diags = Diagnostics::new();
        let a = series(&[100.0, 100.0, 100.0]);

        let range = DisplayRange::for_series(&a, &CleanSeries::new(), &mut diags).unwrap();
        assert!(range.upper - range.lower >= 100.0);
        let center = (range.upper + range.lower) / 2.0;
        assert!((center - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_gets_an_absolute_window() {
        let mut diags = Diagnostics::new();
        let a = series(&[42.0]);

        let range = DisplayRange::for_series(&a, &CleanSeries::new(), &mut diags).unwrap();
        assert!(range.lower < 42.0 && range.upper > 42.0);
    }

    #[test]
    fn one_empty_input_is_fine() {
        let mut diags = Diagnostics::new();
        let b = series(&[5.0, 15.0]);

        let range = DisplayRange::for_series(&CleanSeries::new(), &b, &mut diags).unwrap();
        assert!(range.lower < 5.0 && range.upper > 15.0);
    }

    #[test]
    fn nothing_finite_means_autoscale() {
        let mut diags = Diagnostics::new();
        let range =
            DisplayRange::for_series(&CleanSeries::new(), &CleanSeries::new(), &mut diags);
        assert_eq!(range, None);
        assert!(!diags.is_empty());
    }
}
