use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::{filtered_indices, LENGTH_BOUNDS, WIDTH_BOUNDS};
use crate::data::loader;
use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input widgets
// ---------------------------------------------------------------------------

/// Render the sidebar: petal range sliders and species checkboxes.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Iris Interaction");
    ui.separator();

    ui.strong("Petal Length (cm)");
    range_sliders(ui, &mut state.filter.length, LENGTH_BOUNDS);
    ui.separator();

    ui.strong("Petal Width (cm)");
    range_sliders(ui, &mut state.filter.width, WIDTH_BOUNDS);
    ui.separator();

    ui.strong("Species");
    for species in Species::ALL {
        let color = state.colors.color_for(species);
        let enabled = &mut state.filter.species[species as usize];
        ui.checkbox(enabled, RichText::new(species.label()).color(color));
    }
    ui.separator();

    ui.label(state.filter.description());
}

/// Min/max slider pair over one closed interval.
fn range_sliders(ui: &mut Ui, range: &mut (f64, f64), bounds: (f64, f64)) {
    ui.add(Slider::new(&mut range.0, bounds.0..=bounds.1).text("min"));
    ui.add(Slider::new(&mut range.1, bounds.0..=bounds.1).text("max"));
}

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

        let visible = filtered_indices(&state.dataset, &state.filter);
        ui.label(format!(
            "{} records loaded, {} match the filter",
            state.dataset.len(),
            visible.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user open another Iris-shaped file. On failure the previous
/// dataset stays in place and the error lands in the status bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open iris data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} rows from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
