mod csv_loader;
mod model_store;

pub use {
    csv_loader::{LoadOutcome, load},
    model_store::{ModelOutcome, load_model, save_model},
};
