use {crate::domain::Frequency, chrono::NaiveDate};

/// Common read surface for any date-indexed value series. The range builder
/// and the plot layers only care about this, not which series they got.
pub trait DatedValues {
    fn dates(&self) -> &[NaiveDate];
    fn values(&self) -> &[f64];

    fn is_empty(&self) -> bool {
        self.dates().is_empty()
    }
}

/// Normalized historical price series: strictly increasing unique dates,
/// every value finite. Gaps present in the source are preserved, never filled.
///
/// Built once by the loader and immutable afterwards; the parallel-vector
/// layout matches how the plot consumes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanSeries {
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl CleanSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, maintaining the invariants. Returns false (and keeps
    /// the series unchanged) for non-finite prices and for dates that do not
    /// extend the index strictly forward.
    pub(crate) fn try_push(&mut self, date: NaiveDate, close: f64) -> bool {
        if !close.is_finite() {
            return false;
        }
        if let Some(&last) = self.dates.last() {
            if date <= last {
                return false;
            }
        }
        self.dates.push(date);
        self.closes.push(close);
        true
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// The anchor date: forecast indices are generated from here.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Keep only the first `max_rows` points.
    pub(crate) fn truncate(&mut self, max_rows: usize) {
        self.dates.truncate(max_rows);
        self.closes.truncate(max_rows);
    }

    /// The last `n` points as a new series (all of them when `n` exceeds the
    /// length). Used for the zoomed chart slice.
    pub fn tail(&self, n: usize) -> CleanSeries {
        let start = self.len().saturating_sub(n);
        CleanSeries {
            dates: self.dates[start..].to_vec(),
            closes: self.closes[start..].to_vec(),
        }
    }
}

impl DatedValues for CleanSeries {
    fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    fn values(&self) -> &[f64] {
        &self.closes
    }
}

/// Forecast values aligned to the periods immediately following an anchor
/// series. Either holds exactly the requested number of steps or is empty;
/// the adapter never produces a partially dated result.
#[derive(Debug, Clone, Default)]
pub struct ForecastSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    freq: Option<Frequency>,
}

impl ForecastSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        dates: Vec<NaiveDate>,
        values: Vec<f64>,
        freq: Option<Frequency>,
    ) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values, freq }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Sampling frequency label, when one was inferable. Purely a convenience
    /// for downstream consumers.
    pub fn freq(&self) -> Option<Frequency> {
        self.freq
    }
}

impl DatedValues for ForecastSeries {
    fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    fn values(&self) -> &[f64] {
        &self.values
    }
}
