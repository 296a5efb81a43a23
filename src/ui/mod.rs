mod app;
mod display_range;

pub use {app::App, display_range::DisplayRange};
