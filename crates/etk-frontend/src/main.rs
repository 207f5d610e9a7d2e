//! EditTK demo editor entry point

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "etk_frontend=debug,etk_gizmo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EditTK");

    let config_path = std::env::var_os("ETK_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| etk_frontend::config::CONFIG_FILE_NAME.into());
    let config = etk_frontend::ConfigManager::load_or_default(config_path);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("EditTK"),
        ..Default::default()
    };

    eframe::run_native(
        "etk",
        native_options,
        Box::new(|cc| Ok(Box::new(etk_frontend::EditorApp::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
