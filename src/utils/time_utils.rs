use chrono::{Datelike, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Plot x coordinate for a date: whole days from the common era. Keeps
    /// consecutive daily samples exactly 1.0 apart on the axis.
    pub fn date_to_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    /// Inverse of [`TimeUtils::date_to_x`], for axis label formatting.
    pub fn x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
    }

    // Used for display purposes
    pub fn format_date(date: NaiveDate) -> String {
        format!("{}", date.format(Self::STANDARD_TIME_FORMAT))
    }
}
