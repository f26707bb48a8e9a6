/// Bottom status bar -- sweep progress and totals.
use crate::state::{AppPhase, AppState};
use egui::Ui;
use regsweep_core::model::size::format_count;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);
    let color_error = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);

    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Picking => {
                ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
                if state.config.dry_run {
                    ui.separator();
                    ui.label(
                        egui::RichText::new("Dry run")
                            .size(11.0)
                            .color(color_warning),
                    );
                }
            }
            AppPhase::Sweeping => {
                ui.spinner();

                let display_path = truncate_path(&state.current_folder, 60);
                ui.label(
                    egui::RichText::new(format!("Sweeping {}...", display_path))
                        .size(12.0)
                        .color(color_normal),
                );

                ui.separator();

                ui.label(
                    egui::RichText::new(format!(
                        "{} / {} folders",
                        format_count(state.folders_done),
                        format_count(state.folders_total)
                    ))
                    .size(12.0)
                    .color(color_normal),
                );

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("{} PDFs deleted", format_count(state.pdfs_deleted)))
                        .size(12.0)
                        .color(color_accent),
                );

                if !state.skipped.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} skipped",
                            format_count(state.skipped.len() as u64)
                        ))
                        .size(12.0)
                        .color(color_warning),
                    );
                }
            }
            AppPhase::Finished => {
                if let Some(ref report) = state.report {
                    let status_text = if report.dry_run {
                        "\u{2713} Dry run complete (nothing written)"
                    } else {
                        "\u{2713} Sweep complete"
                    };
                    ui.label(
                        egui::RichText::new(status_text)
                            .size(12.0)
                            .color(color_success),
                    );

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} registers",
                            format_count(report.folders_reported)
                        ))
                        .size(12.0)
                        .color(color_normal),
                    );

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} PDFs deleted",
                            format_count(report.deleted_files.len() as u64)
                        ))
                        .size(12.0)
                        .color(color_accent),
                    );

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.1}s", report.duration.as_secs_f64()))
                            .size(12.0)
                            .color(color_weak),
                    );

                    if !report.skipped.is_empty() {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} skipped",
                                format_count(report.skipped.len() as u64)
                            ))
                            .size(12.0)
                            .color(color_warning),
                        );
                    }
                }
            }
            AppPhase::Failed => {
                ui.label(
                    egui::RichText::new("\u{2717} Sweep failed")
                        .size(12.0)
                        .color(color_error),
                );
            }
        }
    });
}

/// Truncate a path string to fit within `max_len` characters,
/// replacing the middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let half = max_len.saturating_sub(3) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::truncate_path;

    #[test]
    fn short_paths_are_untouched() {
        assert_eq!(truncate_path("/data/Re2024", 60), "/data/Re2024");
    }

    #[test]
    fn long_paths_keep_both_ends() {
        let path = format!("/data/{}/Gelöschte", "x".repeat(80));
        let shown = truncate_path(&path, 21);
        assert_eq!(shown.chars().count(), 21);
        assert!(shown.starts_with("/data/xxx"));
        assert!(shown.ends_with("Gelöschte"));
        assert!(shown.contains("..."));
    }
}
