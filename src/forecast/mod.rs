mod adapter;
mod model;

pub use {
    adapter::{ForecastOutcome, forecast},
    model::{ArimaModel, ForecastModel, ForecastOutput},
};
