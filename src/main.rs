#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    clap::Parser,
    eframe::NativeOptions,
    price_scope::{Cli, run_app},
    std::panic,
};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("price_scope"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_maximized(true)
            .with_title("Price Scope - History and Forecast"),
        ..Default::default()
    };

    eframe::run_native(
        "Price Scope",
        options,
        Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
    )
}
