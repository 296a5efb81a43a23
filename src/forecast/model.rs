use {
    anyhow::{Result, ensure},
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Shapes a model is allowed to hand back from a multi-step prediction.
#[derive(Debug, Clone)]
pub enum ForecastOutput {
    /// Flat numeric sequence; the adapter dates it from the anchor series.
    Values(Vec<f64>),
    /// Already-dated sequence; accepted as-is.
    Dated(Vec<(NaiveDate, f64)>),
}

/// Capability interface for a previously fitted forecasting model.
///
/// The pipeline only needs "give me `steps` future points from your own
/// internal state"; any persisted format can sit behind this.
pub trait ForecastModel {
    /// One-shot multi-step prediction.
    fn predict(&self, steps: usize) -> Result<ForecastOutput>;

    fn name(&self) -> &str;
}

/// AR(p) model with optional first differencing and a drift term, fitted
/// offline and persisted with bincode. `tail` carries the final training
/// observations the recursion starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArimaModel {
    /// AR coefficients, most recent lag first.
    pub ar: Vec<f64>,
    /// Differencing order; 0 or 1.
    pub d: u8,
    pub drift: f64,
    /// Trailing training observations, oldest first.
    pub tail: Vec<f64>,
}

impl ArimaModel {
    pub fn new(ar: Vec<f64>, d: u8, drift: f64, tail: Vec<f64>) -> Result<Self> {
        ensure!(d <= 1, "only differencing orders 0 and 1 are supported");
        ensure!(
            tail.len() >= ar.len() + d as usize && !tail.is_empty(),
            "tail of {} observations is too short for an AR({}) d={} model",
            tail.len(),
            ar.len(),
            d
        );
        ensure!(
            ar.iter().chain(tail.iter()).all(|v| v.is_finite()) && drift.is_finite(),
            "model parameters must be finite"
        );
        Ok(Self { ar, d, drift, tail })
    }
}

impl ForecastModel for ArimaModel {
    fn predict(&self, steps: usize) -> Result<ForecastOutput> {
        let p = self.ar.len();

        // Run the recursion in differenced space when d=1, then integrate
        // back to price levels.
        let mut work: Vec<f64> = if self.d == 1 {
            self.tail.windows(2).map(|w| w[1] - w[0]).collect()
        } else {
            self.tail.clone()
        };
        // Deserialized models bypass `new`, so re-check the state here.
        ensure!(
            work.len() >= p && !self.tail.is_empty(),
            "not enough stored state for an AR({p}) recursion"
        );

        let mut last_level = self.tail[self.tail.len() - 1];
        let mut levels = Vec::with_capacity(steps);
        for _ in 0..steps {
            let mut next = self.drift;
            for (k, coef) in self.ar.iter().enumerate() {
                next += coef * work[work.len() - 1 - k];
            }
            work.push(next);
            last_level = if self.d == 1 { last_level + next } else { next };
            levels.push(last_level);
        }
        Ok(ForecastOutput::Values(levels))
    }

    fn name(&self) -> &str {
        "arima"
    }
}
