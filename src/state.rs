use crate::color::SpeciesColors;
use crate::data::filter::RangeFilter;
use crate::data::model::IrisDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `dataset` is loaded once and treated as an immutable snapshot; outputs
/// derive their filtered views from it on every evaluation instead of
/// mutating or caching anything here.
pub struct AppState {
    /// Loaded dataset.
    pub dataset: IrisDataset,

    /// Current slider / checkbox values from the sidebar.
    pub filter: RangeFilter,

    /// Species → colour assignment used by every chart.
    pub colors: SpeciesColors,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the composition root around a freshly loaded dataset.
    pub fn new(dataset: IrisDataset) -> Self {
        Self {
            dataset,
            filter: RangeFilter::default(),
            colors: SpeciesColors::new(),
            status_message: None,
        }
    }

    /// Swap in a newly opened dataset, resetting the filters to defaults.
    pub fn set_dataset(&mut self, dataset: IrisDataset) {
        self.dataset = dataset;
        self.filter = RangeFilter::default();
        self.status_message = None;
    }
}
