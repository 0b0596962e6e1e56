use eframe::egui;

use super::app::PetApp;

pub fn draw_left_panel(ctx: &egui::Context, app: &mut PetApp) {
    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label("UI Scale");
            let scale = ui.add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0));
            if scale.drag_stopped() {
                app.persist_settings();
            }

            ui.separator();

            ui.label("Pet file");
            ui.small(app.settings.pet_file.display().to_string());

            ui.horizontal(|ui| {
                if ui.button("Open…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Pet file", &["json"])
                        .pick_file()
                    {
                        app.open_session(path, None);
                    }
                }

                if ui.button("New…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Pet file", &["json"])
                        .set_file_name("pet.json")
                        .save_file()
                    {
                        app.open_session(path, None);
                    }
                }
            });

            let has_pet = app
                .session
                .as_ref()
                .is_some_and(|s| s.record().is_some());

            if !has_pet {
                ui.separator();
                draw_create(ui, app);
            }
        });
}

/* =========================
   Create
   ========================= */

fn draw_create(ui: &mut egui::Ui, app: &mut PetApp) {
    ui.label("Name your pet");
    ui.text_edit_singleline(&mut app.ui.new_pet_name);

    let name = app.ui.new_pet_name.trim().to_string();
    if ui
        .add_enabled(!name.is_empty(), egui::Button::new("Create"))
        .clicked()
    {
        app.ui.new_pet_name.clear();
        app.create_pet(name);
    }
}
