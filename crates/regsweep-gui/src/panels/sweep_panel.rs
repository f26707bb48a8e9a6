/// Sweep panel -- live progress while sweeping and the per-folder results
/// afterwards.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use regsweep_core::model::size::format_count;

/// Draw the sweep panel (central content outside the picking phase).
pub fn sweep_panel(ui: &mut Ui, state: &AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_accent = ui.visuals().hyperlink_color;
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    if let Some(ref root) = state.sweep_root {
        ui.label(
            egui::RichText::new(root.to_string_lossy().into_owned())
                .size(14.0)
                .strong()
                .color(color_normal),
        );
    }
    if !state.root_label.is_empty() {
        ui.label(
            egui::RichText::new(format!("Label: {}", state.root_label))
                .size(12.0)
                .color(color_accent),
        );
    }
    ui.add_space(6.0);

    match state.phase {
        AppPhase::Sweeping => {
            ui.add(
                egui::ProgressBar::new(state.progress_fraction())
                    .show_percentage()
                    .animate(true),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!(
                    "{} of {} folders done, {} PDFs deleted",
                    format_count(state.folders_done),
                    format_count(state.folders_total),
                    format_count(state.pdfs_deleted)
                ))
                .size(12.0)
                .color(color_muted),
            );
        }
        AppPhase::Finished => results_grid(ui, state),
        AppPhase::Failed => {
            if let Some(ref msg) = state.error_message {
                ui.label(
                    egui::RichText::new(msg)
                        .size(12.0)
                        .color(ui.visuals().error_fg_color),
                );
            }
        }
        AppPhase::Picking => {}
    }

    // ── Skipped entries ───────────────────────────────────
    if !state.skipped.is_empty() {
        ui.add_space(8.0);
        ui.separator();
        ui.label(
            egui::RichText::new(format!("⚠ Skipped ({})", state.skipped.len()))
                .strong()
                .color(color_warning),
        );
        egui::ScrollArea::vertical()
            .id_salt("skipped_scroll")
            .max_height(140.0)
            .show(ui, |ui| {
                for (path, reason) in &state.skipped {
                    ui.label(
                        egui::RichText::new(format!("{path}: {reason}"))
                            .size(11.0)
                            .color(color_muted),
                    );
                }
            });
    }
}

/// Per-folder counts of a finished sweep, in walk order.
fn results_grid(ui: &mut Ui, state: &AppState) {
    let Some(ref report) = state.report else {
        return;
    };
    let color_muted = ui.visuals().weak_text_color();

    if let Some(ref path) = report.inventory_path {
        ui.label(
            egui::RichText::new(format!("Summary: {}", path.display()))
                .size(12.0)
                .color(color_muted),
        );
        ui.add_space(4.0);
    }

    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .max_height((ui.available_height() - 170.0).max(120.0))
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(6)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for heading in ["Folder", "Subfolders", "Files", "PDF", "JPEG", "Other"] {
                        ui.label(egui::RichText::new(heading).strong());
                    }
                    ui.end_row();

                    for stats in &report.folder_stats {
                        ui.label(stats.folder_name.as_str());
                        ui.label(format_count(stats.subfolder_count));
                        ui.label(format_count(stats.file_count));
                        ui.label(format_count(stats.pdf_count));
                        ui.label(format_count(stats.jpeg_count));
                        ui.label(format_count(stats.other_count));
                        ui.end_row();
                    }
                });
        });
}
