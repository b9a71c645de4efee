use anyhow::Result;
use eframe::egui::{Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::data::filter::filtered_indices;
use crate::data::model::{IrisDataset, Species, NUMERIC_COLUMNS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (filtered view)
// ---------------------------------------------------------------------------

/// Petal width against petal length for the rows passing the current
/// filter, one point group per species.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) -> Result<()> {
    let visible = filtered_indices(&state.dataset, &state.filter);

    Plot::new("iris_scatterplot")
        .legend(Legend::default())
        .x_axis_label("petal_length_cm")
        .y_axis_label("petal_width_cm")
        .height(320.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for species in Species::ALL {
                let points: PlotPoints = visible
                    .iter()
                    .map(|&i| &state.dataset.rows()[i])
                    .filter(|row| row.species == species)
                    .map(|row| [row.petal_length_cm, row.petal_width_cm])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(species.label())
                        .color(state.colors.color_for(species))
                        .radius(3.0),
                );
            }
        });

    Ok(())
}

// ---------------------------------------------------------------------------
// Pair plots (full dataset)
// ---------------------------------------------------------------------------

const HISTOGRAM_BINS: usize = 12;

/// Grid of plots over every numeric column of the full dataset: scatter for
/// each column pair, a per-species histogram on the diagonal.
pub fn pair_plots(ui: &mut Ui, state: &AppState) -> Result<()> {
    let n = NUMERIC_COLUMNS.len();
    let spacing = ui.spacing().item_spacing.x;
    let cell = ((ui.available_width() - spacing * (n as f32 - 1.0)) / n as f32).max(80.0);

    for row_col in 0..n {
        ui.horizontal(|ui| {
            for col in 0..n {
                let plot = Plot::new(format!("iris_pair_{row_col}_{col}"))
                    .min_size(Vec2::new(80.0, 64.0))
                    .width(cell)
                    .height(cell * 0.8)
                    .show_axes([row_col == n - 1, col == 0])
                    .allow_drag(false)
                    .allow_scroll(false)
                    .allow_zoom(false)
                    .allow_boxed_zoom(false);

                plot.show(ui, |plot_ui| {
                    if row_col == col {
                        for chart in histograms(&state.dataset, col, state) {
                            plot_ui.bar_chart(chart);
                        }
                    } else {
                        for species in Species::ALL {
                            let points: PlotPoints = state
                                .dataset
                                .rows()
                                .iter()
                                .filter(|r| r.species == species)
                                .map(|r| [r.numeric(col), r.numeric(row_col)])
                                .collect();
                            plot_ui.points(
                                Points::new(points)
                                    .color(state.colors.color_for(species))
                                    .radius(1.5),
                            );
                        }
                    }
                });
            }
        });
    }

    Ok(())
}

/// Per-species histograms of one numeric column, sharing a common binning.
fn histograms(dataset: &IrisDataset, col: usize, state: &AppState) -> Vec<BarChart> {
    let values = dataset.numeric_column(col);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }
    let bin_width = range / HISTOGRAM_BINS as f64;

    Species::ALL
        .iter()
        .map(|&species| {
            let mut counts = [0usize; HISTOGRAM_BINS];
            for row in dataset.rows().iter().filter(|r| r.species == species) {
                let v = row.numeric(col);
                let bin = (((v - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
                counts[bin] += 1;
            }
            let bars: Vec<Bar> = counts
                .iter()
                .enumerate()
                .filter(|(_, &c)| c > 0)
                .map(|(i, &c)| {
                    let center = min + (i as f64 + 0.5) * bin_width;
                    Bar::new(center, c as f64).width(bin_width)
                })
                .collect();
            BarChart::new(bars).color(state.colors.color_for(species))
        })
        .collect()
}
