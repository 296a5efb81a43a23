use argminmax::ArgMinMax;

/// Min and max over the finite entries of `values`. `None` when nothing
/// finite is left to measure.
#[inline]
pub(crate) fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let (min_idx, max_idx) = finite.argminmax();
    Some((finite[min_idx], finite[max_idx]))
}

#[inline]
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_min_max_ignores_non_finite_entries() {
        let values = [10.0, f64::NAN, 30.0, f64::INFINITY, 20.0];
        assert_eq!(finite_min_max(&values), Some((10.0, 30.0)));
    }

    #[test]
    fn finite_min_max_is_none_when_nothing_finite() {
        assert_eq!(finite_min_max(&[]), None);
        assert_eq!(finite_min_max(&[f64::NAN, f64::NEG_INFINITY]), None);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
    }
}
