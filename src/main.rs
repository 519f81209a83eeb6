//! Elliptic Curve Explorer.
//!
//! Visualisiert die Punktaddition auf y² = x³ + a·x + b in der reellen Ebene
//! und über dem Restklassenkörper F_p.

use eframe::egui;
use elliptic_curve_explorer::{ui, AppController, AppIntent, AppState, ExplorerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Elliptic Curve Explorer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let config_path = ExplorerOptions::config_path();
        let explorer_options = ExplorerOptions::load_from_file(&config_path);
        let [canvas_w, canvas_h] = explorer_options.canvas_size;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([canvas_w + 280.0, canvas_h + 90.0])
                .with_title("Elliptic Curve Explorer"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Elliptic Curve Explorer",
            options,
            Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(explorer_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ExplorerApp {
    state: AppState,
    controller: AppController,
}

impl ExplorerApp {
    fn new(options: ExplorerOptions) -> Self {
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();
        if let Err(e) = controller.regenerate(&mut state) {
            log::error!("Erster Aufbau fehlgeschlagen: {:#}", e);
        }
        Self { state, controller }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl ExplorerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_controls_panel(ctx, &mut self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));
        ui::render_canvas(ctx, &self.state);

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        if events.is_empty() {
            return;
        }
        if let Err(e) = self.controller.handle_intents(&mut self.state, events) {
            log::error!("Event handling failed: {:#}", e);
        }
    }
}
