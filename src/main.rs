#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use cot_scope::{Cli, fetch_dashboard_data, run_app, write_bundle_async};

fn main() -> eframe::Result {
    use clap::Parser;
    use cot_scope::config::PERSISTENCE;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let (bundle, signature) = rt.block_on(fetch_dashboard_data(&args));

    // D. Background Cache Write
    let cache_bundle = bundle.clone();
    rt.spawn(async move {
        if let Err(e) = write_bundle_async(signature, cache_bundle).await {
            log::error!("⚠️  Failed to write cache: {}", e);
        }
    });

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app_state_path)),
        ..Default::default()
    };

    eframe::run_native(
        "COT Scope - Positioning at a glance",
        options,
        Box::new(move |cc| Ok(run_app(cc, bundle))),
    )
}
