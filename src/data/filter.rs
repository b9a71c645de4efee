use super::model::{IrisDataset, Species};

// ---------------------------------------------------------------------------
// Filter predicate: petal ranges + species toggles
// ---------------------------------------------------------------------------

/// Current filter selections, read from the sidebar widgets each frame.
///
/// Both intervals are closed. `min <= max` is expected but not enforced:
/// an inverted interval simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    /// Inclusive `[min, max]` on `petal_length_cm`.
    pub length: (f64, f64),
    /// Inclusive `[min, max]` on `petal_width_cm`.
    pub width: (f64, f64),
    /// Per-species toggle, indexed by [`Species::ALL`] order.
    pub species: [bool; 3],
}

/// Widget bounds for the petal length slider.
pub const LENGTH_BOUNDS: (f64, f64) = (1.0, 7.0);
/// Widget bounds for the petal width slider.
pub const WIDTH_BOUNDS: (f64, f64) = (0.0, 3.0);

impl Default for RangeFilter {
    fn default() -> Self {
        RangeFilter {
            length: (1.0, 3.0),
            width: (0.0, 3.0),
            species: [true; 3],
        }
    }
}

impl RangeFilter {
    pub fn species_enabled(&self, species: Species) -> bool {
        self.species[species as usize]
    }

    /// Human-readable description of the active ranges, shown in the sidebar.
    pub fn description(&self) -> String {
        format!(
            "Petal length between {} and {}; Petal width between {} and {}",
            self.length.0, self.length.1, self.width.0, self.width.1
        )
    }
}

/// Return indices of rows that pass all active filters.
///
/// A row passes when its petal length and petal width each fall inside the
/// corresponding closed interval and its species toggle is on. Indices come
/// back in original row order; an empty dataset yields an empty result.
pub fn filtered_indices(dataset: &IrisDataset, filter: &RangeFilter) -> Vec<usize> {
    let (length_min, length_max) = filter.length;
    let (width_min, width_max) = filter.width;

    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.petal_length_cm >= length_min
                && row.petal_length_cm <= length_max
                && row.petal_width_cm >= width_min
                && row.petal_width_cm <= width_max
                && filter.species_enabled(row.species)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    fn wide_open() -> RangeFilter {
        RangeFilter {
            length: LENGTH_BOUNDS,
            width: WIDTH_BOUNDS,
            species: [true; 3],
        }
    }

    #[test]
    fn wide_open_filter_keeps_every_row() {
        let ds = load_embedded().unwrap();
        let idx = filtered_indices(&ds, &wide_open());
        assert_eq!(idx.len(), ds.len());
        // Original row order preserved.
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_kept_row_satisfies_both_intervals() {
        let ds = load_embedded().unwrap();
        let filter = RangeFilter {
            length: (1.0, 3.0),
            width: (0.0, 1.0),
            species: [true; 3],
        };
        let idx = filtered_indices(&ds, &filter);
        for &i in &idx {
            let row = &ds.rows()[i];
            assert!(row.petal_length_cm >= 1.0 && row.petal_length_cm <= 3.0);
            assert!(row.petal_width_cm >= 0.0 && row.petal_width_cm <= 1.0);
        }
        // Completeness: no qualifying row was dropped.
        let expected = ds
            .rows()
            .iter()
            .filter(|r| {
                r.petal_length_cm >= 1.0
                    && r.petal_length_cm <= 3.0
                    && r.petal_width_cm >= 0.0
                    && r.petal_width_cm <= 1.0
            })
            .count();
        assert_eq!(idx.len(), expected);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = load_embedded().unwrap();
        let filter = RangeFilter {
            length: (1.0, 4.5),
            width: (0.2, 1.5),
            species: [true; 3],
        };
        let first = filtered_indices(&ds, &filter);
        let view = IrisDataset::from_rows(first.iter().map(|&i| ds.rows()[i].clone()).collect());
        let second = filtered_indices(&view, &filter);
        assert_eq!(second.len(), first.len());
        assert!(second.iter().enumerate().all(|(pos, &i)| pos == i));
    }

    #[test]
    fn degenerate_interval_matches_exact_value() {
        let ds = load_embedded().unwrap();
        let filter = RangeFilter {
            length: (1.4, 1.4),
            width: WIDTH_BOUNDS,
            species: [true; 3],
        };
        let idx = filtered_indices(&ds, &filter);
        assert!(!idx.is_empty());
        for &i in &idx {
            assert_eq!(ds.rows()[i].petal_length_cm, 1.4);
        }
        let expected = ds.rows().iter().filter(|r| r.petal_length_cm == 1.4).count();
        assert_eq!(idx.len(), expected);
    }

    #[test]
    fn inverted_interval_yields_empty_view() {
        let ds = load_embedded().unwrap();
        let filter = RangeFilter {
            length: (5.0, 1.0),
            width: WIDTH_BOUNDS,
            species: [true; 3],
        };
        assert!(filtered_indices(&ds, &filter).is_empty());
    }

    #[test]
    fn species_toggle_excludes_that_species() {
        let ds = load_embedded().unwrap();
        let mut filter = wide_open();
        filter.species[Species::Setosa as usize] = false;
        let idx = filtered_indices(&ds, &filter);
        assert_eq!(idx.len(), 100);
        assert!(idx.iter().all(|&i| ds.rows()[i].species != Species::Setosa));
    }

    #[test]
    fn empty_dataset_yields_empty_view() {
        let ds = IrisDataset::from_rows(Vec::new());
        assert!(filtered_indices(&ds, &wide_open()).is_empty());
    }

    #[test]
    fn width_interval_is_applied_independently_of_length() {
        let ds = load_embedded().unwrap();
        let loose = RangeFilter {
            length: LENGTH_BOUNDS,
            width: WIDTH_BOUNDS,
            species: [true; 3],
        };
        let tight = RangeFilter {
            width: (0.0, 0.3),
            ..loose.clone()
        };
        let all = filtered_indices(&ds, &loose);
        let narrow = filtered_indices(&ds, &tight);
        assert!(narrow.len() < all.len());
        assert!(narrow.iter().all(|&i| ds.rows()[i].petal_width_cm <= 0.3));
    }

    #[test]
    fn filter_description_names_both_ranges() {
        let filter = RangeFilter {
            length: (1.0, 3.0),
            width: (0.0, 1.5),
            species: [true; 3],
        };
        assert_eq!(
            filter.description(),
            "Petal length between 1 and 3; Petal width between 0 and 1.5"
        );
    }
}
