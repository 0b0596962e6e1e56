use eframe::egui;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, warn};

use vpet::settings::PetSettings;
use vpet::settings_io::save_settings;
use vpet::{JsonFileStore, PetAction, PetError, SystemClock, VirtualPet};

use super::center_panel::draw_center_panel;
use super::left_panel::draw_left_panel;
use super::message::Message;
use super::right_panel::draw_right_panel;

pub type Session = VirtualPet<JsonFileStore, SystemClock>;

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub new_pet_name: String,
    pub rendered_messages: Vec<Message>,
    pub should_auto_scroll: bool,
}

/* =========================
   App
   ========================= */

pub struct PetApp {
    pub ui: UiState,
    pub settings: PetSettings,

    /// `None` only when the pet file could not be read at all.
    pub session: Option<Session>,
}

impl PetApp {
    pub fn new(settings: PetSettings) -> Self {
        let mut app = Self {
            ui: UiState::default(),
            settings,
            session: None,
        };

        let path = app.settings.pet_file.clone();
        let name = app.settings.pet_name.clone();
        app.open_session(path, name);
        app
    }

    pub fn open_session(&mut self, path: PathBuf, name: Option<String>) {
        match VirtualPet::open_file(path.clone(), name) {
            Ok(session) => {
                match session.record() {
                    Some(record) => self.push(Message::system(format!(
                        "Loaded {} from {}",
                        record.name,
                        path.display()
                    ))),
                    None => self.push(Message::system(format!(
                        "No pet in {} yet. Give it a name to create one.",
                        path.display()
                    ))),
                }
                self.session = Some(session);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to open pet file");
                self.push(Message::error(e.to_string()));
                self.session = None;
            }
        }

        if self.settings.pet_file != path {
            self.settings.pet_file = path;
            self.persist_settings();
        }
    }

    pub fn create_pet(&mut self, name: String) {
        let path = self.settings.pet_file.clone();
        self.settings.pet_name = Some(name.clone());
        self.persist_settings();

        // a fresh session carries the new name and creates the pet on open
        self.open_session(path, Some(name));
    }

    pub fn run_action(&mut self, action: PetAction) {
        let Some(session) = self.session.as_mut() else {
            self.push(Message::error(PetError::NotFound.to_string()));
            return;
        };

        let result = session.perform(action);
        let name = session.name().unwrap_or_default().to_string();

        match result {
            Ok(outcome) => self.push(Message::pet(outcome.describe(&name, action))),
            Err(e) => self.push(Message::error(e.to_string())),
        }
    }

    pub fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings) {
            warn!(error = %e, "failed to save settings");
        }
    }

    pub fn push(&mut self, msg: Message) {
        self.ui.rendered_messages.push(msg);
        self.ui.should_auto_scroll = true;
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for PetApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        draw_left_panel(ctx, self);
        draw_right_panel(ctx, self);
        draw_center_panel(ctx, self);

        self.ui.should_auto_scroll = false;

        // cooldown hints count down
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
