use {
    chrono::{Duration, NaiveDate},
    itertools::Itertools,
};

/// The uniform sampling interval implied by a date index, in whole days.
///
/// Inference is deliberately conservative: an index that is too short or has
/// uneven gaps yields `None`, and callers suppress whatever depended on it
/// rather than guess. A wrongly dated forecast is worse than no forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    days: i64,
}

impl Frequency {
    pub const DAILY: Frequency = Frequency { days: 1 };

    pub fn days(&self) -> i64 {
        self.days
    }

    /// Infer the spacing of `dates`. Requires at least three dates and
    /// identical positive gaps between every consecutive pair.
    pub fn infer(dates: &[NaiveDate]) -> Option<Frequency> {
        if dates.len() < 3 {
            return None;
        }
        let mut gaps = dates.iter().tuple_windows().map(|(a, b)| (*b - *a).num_days());
        let first = gaps.next()?;
        if first < 1 {
            return None;
        }
        if gaps.all(|g| g == first) {
            Some(Frequency { days: first })
        } else {
            None
        }
    }

    /// The date one period after `date`.
    pub fn step(&self, date: NaiveDate) -> NaiveDate {
        date + Duration::days(self.days)
    }

    /// `n` consecutive dates starting one period after `anchor`.
    pub fn future_dates(&self, anchor: NaiveDate, n: usize) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(n);
        let mut current = anchor;
        for _ in 0..n {
            current = self.step(current);
            dates.push(current);
        }
        dates
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.days {
            1 => write!(f, "1d"),
            7 => write!(f, "1w"),
            n => write!(f, "{}d", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn infers_daily_spacing() {
        let dates = [d("2024-01-08"), d("2024-01-09"), d("2024-01-10")];
        assert_eq!(Frequency::infer(&dates), Some(Frequency::DAILY));
    }

    #[test]
    fn infers_weekly_spacing() {
        let dates = [d("2024-01-01"), d("2024-01-08"), d("2024-01-15")];
        let freq = Frequency::infer(&dates).unwrap();
        assert_eq!(freq.days(), 7);
        assert_eq!(freq.to_string(), "1w");
    }

    #[test]
    fn irregular_gaps_yield_none() {
        let dates = [d("2024-01-01"), d("2024-01-02"), d("2024-01-05")];
        assert_eq!(Frequency::infer(&dates), None);
    }

    #[test]
    fn short_index_yields_none() {
        assert_eq!(Frequency::infer(&[]), None);
        assert_eq!(Frequency::infer(&[d("2024-01-01"), d("2024-01-02")]), None);
    }

    #[test]
    fn future_dates_start_one_period_after_anchor() {
        let dates = Frequency::DAILY.future_dates(d("2024-01-10"), 3);
        assert_eq!(dates, vec![d("2024-01-11"), d("2024-01-12"), d("2024-01-13")]);
    }
}
