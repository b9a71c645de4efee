use anyhow::Result;
use eframe::egui::{Color32, RichText, Ui};

use crate::data::filter::filtered_indices;
use crate::data::stats::summary_report;
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Output registry
// ---------------------------------------------------------------------------

/// What a registered output renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Table,
    Text,
    Chart,
}

/// One named output: a read-only function of `(dataset, current inputs)`
/// producing a single displayable artifact. The host (the central panel)
/// invokes every entry each frame.
pub struct Output {
    /// Key matched to a display placeholder; mirrors the server-function
    /// naming of the original dashboard.
    pub name: &'static str,
    /// Section heading shown above the artifact.
    pub title: &'static str,
    pub kind: ArtifactKind,
    render: fn(&mut Ui, &AppState) -> Result<()>,
}

/// All outputs, in display order.
pub const REGISTRY: [Output; 7] = [
    Output {
        name: "iris_scatterplot",
        title: "Scatter Plot (filtered by Petal Length & Width)",
        kind: ArtifactKind::Chart,
        render: plot::scatter_plot,
    },
    Output {
        name: "iris_filtered_record_count",
        title: "Filtered Iris Table",
        kind: ArtifactKind::Text,
        render: filtered_record_count,
    },
    Output {
        name: "iris_filtered_table",
        title: "",
        kind: ArtifactKind::Table,
        render: table::filtered_table,
    },
    Output {
        name: "iris_pairplots",
        title: "Pair Plots",
        kind: ArtifactKind::Chart,
        render: plot::pair_plots,
    },
    Output {
        name: "iris_stats",
        title: "Iris Table Summary Statistics",
        kind: ArtifactKind::Text,
        render: stats_text,
    },
    Output {
        name: "iris_record_count",
        title: "Iris Table",
        kind: ArtifactKind::Text,
        render: record_count,
    },
    Output {
        name: "iris_table",
        title: "",
        kind: ArtifactKind::Table,
        render: table::full_table,
    },
];

/// Render every registered output. A failure in one entry degrades to an
/// inline error label; sibling outputs are unaffected.
pub fn show_all(ui: &mut Ui, state: &AppState) {
    for output in &REGISTRY {
        if !output.title.is_empty() {
            ui.heading(output.title);
        }
        if let Err(e) = (output.render)(ui, state) {
            log::error!("output '{}' failed: {e:#}", output.name);
            ui.label(
                RichText::new(format!("Error rendering {}: {e:#}", output.name))
                    .color(Color32::RED),
            );
        }
        if matches!(output.kind, ArtifactKind::Table | ArtifactKind::Chart) {
            ui.separator();
        }
    }
}

// ---------------------------------------------------------------------------
// Text outputs
// ---------------------------------------------------------------------------

/// `"Showing {n} records"` over the full dataset.
pub fn record_count_string(total: usize) -> String {
    format!("Showing {total} records")
}

/// `"Filter shows {k} of {n} records"` over the current view.
pub fn filtered_record_count_string(filtered: usize, total: usize) -> String {
    format!("Filter shows {filtered} of {total} records")
}

fn record_count(ui: &mut Ui, state: &AppState) -> Result<()> {
    let message = record_count_string(state.dataset.len());
    log::debug!("record count message: {message}");
    ui.label(message);
    Ok(())
}

fn filtered_record_count(ui: &mut Ui, state: &AppState) -> Result<()> {
    log::debug!("Triggered iris_filtered_record_count");
    let visible = filtered_indices(&state.dataset, &state.filter);
    ui.label(filtered_record_count_string(visible.len(), state.dataset.len()));
    Ok(())
}

fn stats_text(ui: &mut Ui, state: &AppState) -> Result<()> {
    ui.monospace(summary_report(&state.dataset));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::RangeFilter;
    use crate::data::loader::load_embedded;

    #[test]
    fn registry_names_are_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn count_strings_have_fixed_wording() {
        assert_eq!(record_count_string(150), "Showing 150 records");
        assert_eq!(
            filtered_record_count_string(50, 150),
            "Filter shows 50 of 150 records"
        );
    }

    #[test]
    fn scenario_length_1_to_3_width_0_to_1() {
        let ds = load_embedded().unwrap();
        let filter = RangeFilter {
            length: (1.0, 3.0),
            width: (0.0, 1.0),
            species: [true; 3],
        };
        let visible = filtered_indices(&ds, &filter);
        let expected = ds
            .rows()
            .iter()
            .filter(|r| {
                (1.0..=3.0).contains(&r.petal_length_cm)
                    && (0.0..=1.0).contains(&r.petal_width_cm)
            })
            .count();
        assert_eq!(visible.len(), expected);
        assert_eq!(
            filtered_record_count_string(visible.len(), ds.len()),
            format!("Filter shows {expected} of 150 records")
        );
    }

    #[test]
    fn total_count_is_invariant_across_filter_changes() {
        let ds = load_embedded().unwrap();
        let total = ds.len();
        for filter in [
            RangeFilter::default(),
            RangeFilter {
                length: (7.0, 1.0),
                ..RangeFilter::default()
            },
        ] {
            let _ = filtered_indices(&ds, &filter);
            assert_eq!(ds.len(), total);
            assert_eq!(record_count_string(ds.len()), "Showing 150 records");
        }
    }
}
