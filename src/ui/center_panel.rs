use eframe::egui;

use vpet::{remaining_cooldown, Clock, PetAction, SystemClock};

use super::app::PetApp;
use super::message::{Message, Speaker};

pub fn draw_center_panel(ctx: &egui::Context, app: &mut PetApp) {
    // ---------- Action bar ----------
    egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
        let mut clicked = None;

        ui.horizontal(|ui| {
            for action in PetAction::ALL {
                let hint = cooldown_hint(app, action);
                if ui
                    .button(action.short_name())
                    .on_hover_text(hint)
                    .clicked()
                {
                    clicked = Some(action);
                }
            }
        });

        if let Some(action) = clicked {
            app.run_action(action);
        }
    });

    // ---------- Message history ----------
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .stick_to_bottom(app.ui.should_auto_scroll)
            .show(ui, |ui| {
                for msg in &app.ui.rendered_messages {
                    draw_message(ui, msg);
                }
            });
    });
}

fn draw_message(ui: &mut egui::Ui, msg: &Message) {
    let color = match msg.speaker {
        Speaker::Pet => egui::Color32::from_rgb(120, 200, 140),
        Speaker::System => egui::Color32::GRAY,
        Speaker::Error => egui::Color32::from_rgb(220, 90, 90),
    };

    ui.add_space(4.0);
    ui.label(egui::RichText::new(&msg.text).color(color));
}

fn cooldown_hint(app: &PetApp, action: PetAction) -> String {
    let Some(record) = app.session.as_ref().and_then(|s| s.record()) else {
        return "No pet yet".to_string();
    };

    match remaining_cooldown(record, action, SystemClock.now()) {
        None => "Ready".to_string(),
        Some(left) => {
            let mins = left.num_minutes() + 1;
            format!("Ready in {}h {:02}m", mins / 60, mins % 60)
        }
    }
}
