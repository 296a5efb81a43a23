//! Fits a small AR(p) model with first differencing and drift from a price
//! CSV and persists it as the bincode artifact the main app loads. Offline
//! tooling, run once per data refresh.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use price_scope::config::SOURCES;
use price_scope::data::{load, save_model};
use price_scope::domain::DatedValues;
use price_scope::forecast::{ArimaModel, ForecastModel, ForecastOutput};
use statrs::statistics::Statistics;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Fit and persist a demo forecasting model")]
struct Args {
    /// Historical price CSV to fit on
    #[arg(long, default_value = SOURCES.history.path)]
    csv: PathBuf,

    /// Where to write the fitted model
    #[arg(long, default_value = SOURCES.model.path)]
    out: PathBuf,

    /// AR order (number of lags on the differenced series)
    #[arg(long, default_value_t = 3)]
    order: usize,
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // 2. Load and clean the history
    log::info!("Fitting AR({}) model from {}", args.order, args.csv.display());
    let outcome = load(&args.csv);
    outcome.diagnostics.log_all();
    let series = outcome.series;
    ensure!(
        series.len() > args.order + 2,
        "need more than {} clean rows to fit an AR({}) model, got {}",
        args.order + 2,
        args.order,
        series.len()
    );

    // 3. Fit on first differences
    let closes = series.values();
    let diffs: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let mean_diff = (&diffs).mean();
    let centered: Vec<f64> = diffs.iter().map(|d| d - mean_diff).collect();

    let autocov = autocovariance(&centered, args.order);
    let ar = levinson_durbin(&autocov, args.order);
    // Intercept form of the mean so predict() can work on raw differences.
    let drift = mean_diff * (1.0 - ar.iter().sum::<f64>());

    let tail = closes[closes.len() - (args.order + 1)..].to_vec();
    let model =
        ArimaModel::new(ar, 1, drift, tail).context("fitted parameters were unusable")?;

    // 4. Persist and sanity-check
    save_model(&args.out, &model)
        .with_context(|| format!("cannot write model to {}", args.out.display()))?;
    log::info!("Model written to {}", args.out.display());

    if let Ok(ForecastOutput::Values(preview)) = model.predict(7) {
        log::info!("7-step preview: {preview:.2?}");
    }
    Ok(())
}

fn autocovariance(centered: &[f64], max_lag: usize) -> Vec<f64> {
    let n = centered.len() as f64;
    (0..=max_lag)
        .map(|lag| {
            centered
                .iter()
                .zip(&centered[lag..])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n
        })
        .collect()
}

/// Solve the Yule-Walker equations for the AR coefficients by
/// Levinson-Durbin recursion. `autocov[0..=p]` in, `p` coefficients out,
/// lag-1 coefficient first.
fn levinson_durbin(autocov: &[f64], p: usize) -> Vec<f64> {
    let mut phi = vec![0.0; p];
    let mut prev = vec![0.0; p];
    let mut error = autocov[0];

    for k in 0..p {
        let mut acc = autocov[k + 1];
        for j in 0..k {
            acc -= prev[j] * autocov[k - j];
        }
        let reflection = if error.abs() > f64::EPSILON {
            acc / error
        } else {
            0.0
        };

        for j in 0..k {
            phi[j] = prev[j] - reflection * prev[k - 1 - j];
        }
        phi[k] = reflection;
        error *= 1.0 - reflection * reflection;
        prev[..=k].copy_from_slice(&phi[..=k]);
    }
    phi
}
