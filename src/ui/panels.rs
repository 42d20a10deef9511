use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Status, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        match (&state.table, &state.source_name) {
            (Some(table), Some(name)) => {
                ui.label(format!("{name}: {} movies", table.len()));
            }
            _ => {
                ui.label("No file loaded – open or drop a CSV / JSON file");
            }
        }

        ui.separator();

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(Color32::from_rgb(0x2e, 0xa0, 0x43)));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// Tab strip
// ---------------------------------------------------------------------------

pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.label());
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie table")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

/// Load the first file dropped onto the window, if any.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.first() else {
        return;
    };
    if dropped.len() > 1 {
        log::warn!("{} files dropped, loading only '{}'", dropped.len(), file.name);
    }

    if let Some(bytes) = &file.bytes {
        state.open_bytes(&file.name, bytes);
    } else if let Some(path) = &file.path {
        state.open_path(path);
    }
}
