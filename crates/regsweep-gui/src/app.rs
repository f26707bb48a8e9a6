/// Main `eframe::App` implementation for RegSweep.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::widgets;
use regsweep_core::SweepConfig;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// initial folder listing is ready before the OS window is created.
pub struct RegSweepState {
    pub(crate) inner: AppState,
}

impl RegSweepState {
    /// Build the state and list the starting folder.
    /// Call this before `eframe::run_native`.
    pub fn build(config: SweepConfig) -> Self {
        Self {
            inner: AppState::new(config),
        }
    }
}

/// The RegSweep application.
pub struct RegSweepApp {
    state: AppState,
}

impl RegSweepApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`RegSweepState::build()`]
    /// *before* `eframe::run_native` is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: RegSweepState) -> Self {
        // Apply initial dark visuals.
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self { state: state.inner }
    }
}

impl eframe::App for RegSweepApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_sweep_messages();

        // Request continuous repaint while sweeping.
        if self.state.phase == AppPhase::Sweeping {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About RegSweep")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🗂 RegSweep")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Counts the files of every folder in a tree,\n\
                             deletes its PDFs, and records everything in\n\
                             one register per folder plus a summary inventory.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Result notice ─────────────────────────────────────────────────
        if self.state.show_result_dialog {
            if let Some(message) = self.state.result_message() {
                let title = if self.state.phase == AppPhase::Failed {
                    "Error"
                } else {
                    "Success"
                };
                let mut dismissed = false;
                egui::Window::new(title)
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.add_space(4.0);
                        ui.label(message);
                        ui.add_space(8.0);
                        ui.vertical_centered(|ui| {
                            if ui.button("OK").clicked() {
                                dismissed = true;
                            }
                        });
                    });
                if dismissed {
                    self.state.dismiss_result();
                }
            }
        }

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.phase == AppPhase::Picking {
                widgets::folder_picker::folder_picker(ui, &mut self.state);
            } else {
                panels::sweep_panel::sweep_panel(ui, &self.state);
            }
        });

        // ── Close request ─────────────────────────────────────────────────
        // The window's own close button counts as cancelling the selection
        // while nothing has run yet.
        // A running sweep holds the window open until it finishes.
        if ctx.input(|i| i.viewport().close_requested()) {
            match self.state.phase {
                AppPhase::Sweeping => ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose),
                AppPhase::Picking if !self.state.exit_requested => self.state.cancel_selection(),
                _ => {}
            }
        }
        if self.state.exit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
