//! FloorPlan Editor.
//!
//! Grundriss-Editor für die Planung von Hausautomations-Installationen:
//! Räume, Masken, Elektro-Overlay, Geräte und Kabelwege auf einem Rasterbild.

use eframe::egui;
use floorplan_editor::app::JsonFileStore;
use floorplan_editor::core::PlanImage;
use floorplan_editor::{ui, AppController, AppIntent, AppState, EditorOptions, Persistence};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("FloorPlan Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1400.0, 860.0])
                .with_title("FloorPlan Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "FloorPlan Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    textures: ui::ViewportTextures,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let data_dir = editor_options.resolved_data_dir();
        log::info!("Datensätze unter {}", data_dir.display());
        let persistence = Persistence::new(
            Box::new(JsonFileStore::new(data_dir)),
            editor_options.save_debounce(),
        );

        let mut state = AppState::with_persistence(persistence);
        state.options = editor_options;

        let mut app = Self {
            state,
            controller: AppController::new(),
            textures: ui::ViewportTextures::default(),
            input: ui::InputState::new(),
        };
        app.process_events(vec![AppIntent::LoadRecordsRequested]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.sync_image_upload(ctx);

        let mut events = self.collect_ui_events(ctx);
        events.push(AppIntent::FrameTick {
            now: Instant::now(),
        });

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::FrameTick { .. }
            )
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_layers_panel(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_calibration_dialog(
            ctx,
            &mut self.state.ui,
            &self.state.mode,
        ));
        events.extend(ui::show_room_name_dialog(
            ctx,
            &mut self.state.ui,
            &self.state.mode,
        ));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(32)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    &self.state.mode,
                    &self.state.options,
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, [rect.width(), rect.height()]);
                ui::paint_scene(ui.painter(), rect, &scene, &self.textures);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.show_warning(format!("{e:#}"));
            }
        }
    }

    /// Lädt geänderte Bilder als egui-Texturen hoch.
    fn sync_image_upload(&mut self, ctx: &egui::Context) {
        if !self.state.view.images_dirty {
            return;
        }
        self.state.view.images_dirty = false;

        self.textures.base = self
            .state
            .view
            .base_image
            .as_deref()
            .map(|image| upload_texture(ctx, "floorplan_base", image));
        self.textures.overlay = self
            .state
            .view
            .overlay_image
            .as_deref()
            .map(|image| upload_texture(ctx, "floorplan_overlay", image));
        log::info!(
            "Texturen hochgeladen (Grundriss: {}, Overlay: {})",
            self.textures.base.is_some(),
            self.textures.overlay.is_some()
        );
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
            return;
        }

        // Nächster Zeitpunkt, zu dem sich ohne Eingabe etwas ändert
        let now = Instant::now();
        let hud_expiry = self
            .state
            .ui
            .visible_message(now)
            .map(|message| message.expires_at);
        let next = [self.state.persistence.next_deadline(), hud_expiry]
            .into_iter()
            .flatten()
            .min();
        if let Some(deadline) = next {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

fn upload_texture(ctx: &egui::Context, name: &str, image: &PlanImage) -> egui::TextureHandle {
    let rgba = image.image_data().to_rgba8();
    let (width, height) = rgba.dimensions();
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], rgba.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}
