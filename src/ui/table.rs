use anyhow::Result;
use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::filter::filtered_indices;
use crate::data::model::{IrisDataset, NUMERIC_COLUMNS, SPECIES_COLUMN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tabular outputs
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;

/// The complete dataset as a table.
pub fn full_table(ui: &mut Ui, state: &AppState) -> Result<()> {
    let indices: Vec<usize> = (0..state.dataset.len()).collect();
    render_table(ui, "iris_table", &state.dataset, &indices);
    Ok(())
}

/// Only the rows passing the current filter.
pub fn filtered_table(ui: &mut Ui, state: &AppState) -> Result<()> {
    log::debug!("Triggered iris_filtered_table");
    let indices = filtered_indices(&state.dataset, &state.filter);
    render_table(ui, "iris_filtered_table", &state.dataset, &indices);
    Ok(())
}

/// Shared renderer: one row per index, original column order.
fn render_table(ui: &mut Ui, id: &str, dataset: &IrisDataset, indices: &[usize]) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto())
            .columns(Column::auto().at_least(110.0), NUMERIC_COLUMNS.len())
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in NUMERIC_COLUMNS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
                header.col(|ui| {
                    ui.strong(SPECIES_COLUMN);
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, indices.len(), |mut table_row| {
                    let dataset_idx = indices[table_row.index()];
                    let row = &dataset.rows()[dataset_idx];
                    table_row.col(|ui| {
                        ui.label(dataset_idx.to_string());
                    });
                    for col in 0..NUMERIC_COLUMNS.len() {
                        table_row.col(|ui| {
                            ui.label(format!("{:.1}", row.numeric(col)));
                        });
                    }
                    table_row.col(|ui| {
                        ui.label(row.species.to_string());
                    });
                });
            });
    });
}
