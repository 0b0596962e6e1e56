use eframe::egui;

use vpet::{PetRecord, PetStatus};

use super::app::PetApp;

pub fn draw_right_panel(ctx: &egui::Context, app: &PetApp) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            match app.session.as_ref().and_then(|s| s.record()) {
                Some(record) => draw_status(ui, record),
                None => {
                    ui.heading("Status");
                    ui.label("No pet data found.");
                }
            }
        });
}

/* =========================
   Status
   ========================= */

fn draw_status(ui: &mut egui::Ui, record: &PetRecord) {
    let status = PetStatus::from(record);

    ui.heading(format!("{}'s Status", status.name));
    ui.separator();

    ui.label(format!("Age: {} days", status.age));
    ui.label(format!("Mood: {}", status.mood));

    ui.add_space(6.0);
    stat_bar(ui, "Hunger", status.hunger);
    stat_bar(ui, "Happiness", status.happiness);
    stat_bar(ui, "Health", status.health);
}

fn stat_bar(ui: &mut egui::Ui, label: &str, value: f64) {
    ui.label(label);
    ui.add(egui::ProgressBar::new((value / 10.0) as f32).text(format!("{value} / 10")));
}
