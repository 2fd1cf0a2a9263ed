use eframe::egui;
use hadith_viewer::{
    core::settings::{
        AppSettings,
        SETTINGS_FILE,
    },
    gui::HadithApp,
    persistence::{
        get_data_file_path,
        load_json_or_default,
    },
};
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hadith_viewer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = load_json_or_default::<AppSettings>(SETTINGS_FILE);
    tracing::info!(
        "Settings from {} (api: {}, editions: {}/{})",
        get_data_file_path(SETTINGS_FILE).display(),
        settings.api_base,
        settings.primary_edition,
        settings.secondary_edition
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hadith Viewer")
            .with_inner_size([760.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hadith Viewer",
        options,
        Box::new(|cc| Ok(Box::new(HadithApp::new(cc, settings)?))),
    )
}
