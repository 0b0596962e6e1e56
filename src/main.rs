mod ui;

use vpet::settings_io::load_settings;

fn main() -> anyhow::Result<()> {
    let settings = load_settings();

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level())
        .init();

    tracing::info!(version = vpet::VERSION, pet_file = %settings.pet_file.display(), "starting vpet");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Virtual Pet",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::PetApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
