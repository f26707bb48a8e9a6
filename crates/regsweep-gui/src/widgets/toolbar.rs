/// Top action bar -- run controls, dry-run toggle, theme toggle, and branding.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🗂 RegSweep")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        let picking = state.phase == AppPhase::Picking;

        let run_label = if state.config.dry_run {
            "▶ Dry run"
        } else {
            "▶ Run"
        };
        let run_btn = ui
            .add_enabled(
                picking,
                egui::Button::new(run_label).min_size(egui::vec2(70.0, 28.0)),
            )
            .on_hover_text(if state.config.dry_run {
                "Count files and preview the reports without changing anything"
            } else {
                "Delete every PDF below the selected folder and write the registers"
            });
        if run_btn.clicked() {
            state.start_selected_sweep();
        }

        let cancel_btn = ui.add_enabled(
            picking,
            egui::Button::new("✖ Cancel").min_size(egui::vec2(70.0, 28.0)),
        );
        if cancel_btn.clicked() {
            state.cancel_selection();
        }

        ui.separator();

        ui.add_enabled(
            picking,
            egui::Checkbox::new(&mut state.config.dry_run, "Dry run"),
        )
        .on_hover_text("Leave PDFs in place and write no workbooks");

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About RegSweep").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            if state.config.parallel {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("⚙ {} threads", state.config.worker_threads))
                        .size(11.0)
                        .color(ui.visuals().weak_text_color()),
                );
            }
        });
    });
}
