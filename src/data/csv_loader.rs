//! Historical series loader.
//!
//! Reads the provider CSV export and normalizes it into a [`CleanSeries`].
//! Bad rows are dropped and counted, never fatal; file-level and structural
//! failures degrade to an empty series plus an error diagnostic. The caller
//! treats empty as "cannot proceed".

use {
    crate::{
        config::constants::history,
        domain::{CleanSeries, Diagnostics},
        utils::TimeUtils,
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    csv::ReaderBuilder,
    std::path::Path,
};

/// What a load produced: the cleaned series and everything worth telling the
/// caller about how it got that way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub series: CleanSeries,
    pub diagnostics: Diagnostics,
}

pub fn load(path: &Path) -> LoadOutcome {
    let mut diagnostics = Diagnostics::new();
    match read_series(path, &mut diagnostics) {
        Ok(series) => LoadOutcome { series, diagnostics },
        Err(e) => {
            diagnostics.error(format!(
                "Failed to load history from '{}': {e:#}",
                path.display()
            ));
            LoadOutcome {
                series: CleanSeries::new(),
                diagnostics,
            }
        }
    }
}

fn read_series(path: &Path, diagnostics: &mut Diagnostics) -> Result<CleanSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("cannot open '{}'", path.display()))?;

    let headers = reader.headers().context("cannot read header row")?.clone();
    let close_idx = headers
        .iter()
        .position(|h| h.trim() == history::CLOSE_COLUMN)
        .with_context(|| format!("'{}' column not found in header", history::CLOSE_COLUMN))?;

    let mut series = CleanSeries::new();
    let mut unreadable_rows = 0usize;
    let mut bad_dates = 0usize;
    let mut bad_closes = 0usize;
    let mut out_of_order = 0usize;

    for (row_num, record) in reader.records().enumerate() {
        // The first rows after the header are provider metadata, not prices.
        if row_num < history::METADATA_ROWS {
            continue;
        }
        let record = match record {
            Ok(r) => r,
            Err(_) => {
                unreadable_rows += 1;
                continue;
            }
        };

        let Some(date_cell) = record.get(history::DATE_COLUMN_INDEX) else {
            bad_dates += 1;
            continue;
        };
        let Ok(date) =
            NaiveDate::parse_from_str(date_cell.trim(), TimeUtils::STANDARD_TIME_FORMAT)
        else {
            bad_dates += 1;
            continue;
        };

        let close = record
            .get(close_idx)
            .and_then(|cell| cell.trim().parse::<f64>().ok());
        let Some(close) = close.filter(|v| v.is_finite()) else {
            bad_closes += 1;
            continue;
        };

        if !series.try_push(date, close) {
            out_of_order += 1;
        }
    }

    if unreadable_rows > 0 {
        diagnostics.warn(format!("Dropped {unreadable_rows} unreadable rows"));
    }
    if bad_dates > 0 {
        diagnostics.warn(format!("Dropped {bad_dates} rows with unparseable dates"));
    }
    if bad_closes > 0 {
        diagnostics.warn(format!(
            "Dropped {bad_closes} rows with non-numeric '{}' values",
            history::CLOSE_COLUMN
        ));
    }
    if out_of_order > 0 {
        diagnostics.warn(format!(
            "Dropped {out_of_order} rows with duplicate or out-of-order dates"
        ));
    }

    if series.len() > history::MAX_ROWS {
        diagnostics.warn(format!(
            "History has {} rows, keeping the first {}",
            series.len(),
            history::MAX_ROWS
        ));
        series.truncate(history::MAX_ROWS);
    }

    if series.is_empty() {
        diagnostics.error("History is empty after cleaning");
    }
    Ok(series)
}
