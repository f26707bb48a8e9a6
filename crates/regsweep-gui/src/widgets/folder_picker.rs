/// Folder selection widget.
///
/// A path field, filesystem root shortcuts and the list of subfolders of
/// the folder being browsed. Double-clicking a subfolder opens it.
use crate::picker::filesystem_roots;
use crate::state::AppState;
use egui::Ui;
use regsweep_core::model::DEFAULT_ROOT_LABEL;
use regsweep_core::report::inventory::inventory_file_stem;
use regsweep_core::scanner::label::find_root_label;
use regsweep_core::LabelPolicy;
use std::path::Path;

/// Draw the folder picker.
pub fn folder_picker(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Select Directory");
    ui.add_space(4.0);

    // ── Path field ────────────────────────────────────────
    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(&mut state.browser.path_input)
                .desired_width(ui.available_width() - 90.0)
                .hint_text("Folder path"),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Go").clicked() || submitted {
            state.browser.apply_input();
        }
        if ui
            .button("⬆ Up")
            .on_hover_text("Open the parent folder")
            .clicked()
        {
            state.browser.go_up();
        }
    });

    if let Some(ref err) = state.browser.error {
        ui.label(
            egui::RichText::new(err)
                .size(12.0)
                .color(ui.visuals().warn_fg_color),
        );
    }

    // ── Root shortcuts ────────────────────────────────────
    ui.horizontal_wrapped(|ui| {
        for root in filesystem_roots() {
            if ui.small_button(root.to_string_lossy().into_owned()).clicked() {
                state.browser.navigate_to(root);
            }
        }
    });

    ui.add_space(4.0);
    ui.separator();

    // ── Subfolders ────────────────────────────────────────
    let mut open = None;
    let list_height = (ui.available_height() - 60.0).max(120.0);
    egui::ScrollArea::vertical()
        .max_height(list_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if state.browser.subfolders.is_empty() {
                ui.label(
                    egui::RichText::new("(no subfolders)")
                        .italics()
                        .color(ui.visuals().weak_text_color()),
                );
            }
            for dir in &state.browser.subfolders {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.to_string_lossy().into_owned());
                let response = ui.selectable_label(false, format!("📁 {name}"));
                if response.double_clicked() {
                    open = Some(dir.clone());
                }
                response.on_hover_text(dir.to_string_lossy().into_owned());
            }
        });
    if let Some(dir) = open {
        state.browser.navigate_to(dir);
    }

    ui.separator();

    // ── Label preview ─────────────────────────────────────
    let preview = inventory_preview(state.browser.selection(), state.config.label_policy);
    let color = match &preview {
        InventoryPreview::Labelled(_) => ui.visuals().hyperlink_color,
        InventoryPreview::Fallback(_) => ui.visuals().warn_fg_color,
        InventoryPreview::WillAbort => ui.visuals().error_fg_color,
    };
    ui.label(egui::RichText::new(preview.text()).size(12.0).color(color));
}

/// What the inventory of a sweep of the selected folder will be called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryPreview {
    /// File name of the inventory, from the path's `Re` component.
    Labelled(String),
    /// File name of the inventory under the default label.
    Fallback(String),
    WillAbort,
}

impl InventoryPreview {
    pub fn text(&self) -> String {
        match self {
            Self::Labelled(file) => file.clone(),
            Self::Fallback(file) => format!("No 'Re' folder in path, using {file}"),
            Self::WillAbort => "No 'Re' folder in path, the run will stop".to_string(),
        }
    }
}

pub fn inventory_preview(selection: &Path, policy: LabelPolicy) -> InventoryPreview {
    let file_name = |label: &str| format!("{}.xlsx", inventory_file_stem(label));
    match find_root_label(selection) {
        Some(label) => InventoryPreview::Labelled(file_name(&label)),
        None => match policy {
            LabelPolicy::Fallback => InventoryPreview::Fallback(file_name(DEFAULT_ROOT_LABEL)),
            LabelPolicy::Abort => InventoryPreview::WillAbort,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_path_names_the_inventory() {
        let preview = inventory_preview(Path::new("/data/Re2024/scans"), LabelPolicy::Fallback);
        assert_eq!(preview, InventoryPreview::Labelled("Inventory_Re2024.xlsx".into()));
        assert_eq!(preview.text(), "Inventory_Re2024.xlsx");
    }

    /// The default label yields the bare `Inventory.xlsx` that is written.
    #[test]
    fn fallback_names_the_bare_inventory() {
        let preview = inventory_preview(Path::new("/data/scans"), LabelPolicy::Fallback);
        assert_eq!(preview, InventoryPreview::Fallback("Inventory.xlsx".into()));
        assert_eq!(preview.text(), "No 'Re' folder in path, using Inventory.xlsx");
    }

    #[test]
    fn abort_policy_warns() {
        let preview = inventory_preview(Path::new("/data/scans"), LabelPolicy::Abort);
        assert_eq!(preview, InventoryPreview::WillAbort);
    }
}
