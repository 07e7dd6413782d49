use eframe::egui;
use log::{error, info};

use pawsome_care_egui::backend::config::AdviceConfig;
use pawsome_care_egui::ui::PawsomeCareApp;

fn main() -> Result<(), eframe::Error> {
    // A local .env may carry API_KEY
    dotenv::dotenv().ok();
    env_logger::init();
    info!("Starting PawsomeCare egui application");

    let config = AdviceConfig::load();

    // Phone-sized window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 860.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("PawsomeCare")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "PawsomeCare",
        options,
        Box::new(move |cc| match PawsomeCareApp::new(cc, &config) {
            Ok(app) => {
                info!("Successfully initialized PawsomeCare app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
