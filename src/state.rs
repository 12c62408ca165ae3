use crate::color::CategoryColors;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::ChartDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The chart currently on display (built-in at startup).
    pub dataset: ChartDataset,

    /// Current category / frequency-range selection.
    pub filters: FilterState,

    /// Indices of entries passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Category → colour mapping used by the selector and the chart headers.
    pub category_colors: CategoryColors,

    /// Whether instrument sections start expanded.
    pub expand_all: bool,

    /// Pending section-state override. egui persists each header's
    /// open/closed state, so flipping `expand_all` must force every header
    /// for one frame; the renderer consumes this via
    /// [`AppState::take_expand_override`].
    expand_override: Option<bool>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = AppState {
            dataset: ChartDataset::builtin(),
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            category_colors: CategoryColors::new(&[]),
            expand_all: true,
            expand_override: None,
            status_message: None,
        };
        // Startup integrity check; the category index must agree with the table.
        if let Err(e) = state.dataset.validate() {
            log::error!("built-in chart failed its integrity check: {e}");
        }
        state.reindex();
        state
    }
}

impl AppState {
    /// Swap in a newly loaded chart and reset the filters.
    pub fn set_dataset(&mut self, dataset: ChartDataset) {
        self.dataset = dataset;
        self.filters = FilterState::default();
        self.status_message = None;
        self.reindex();
    }

    /// Restore the built-in reference table.
    pub fn reset_to_builtin(&mut self) {
        self.set_dataset(ChartDataset::builtin());
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
    }

    /// Select a category (`None` = "All") and refilter.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filters.category = category;
        self.refilter();
    }

    /// Flip the expand-all flag and schedule a one-frame override so the
    /// chart forces every section open or closed on the next render.
    pub fn set_expand_all(&mut self, on: bool) {
        self.expand_all = on;
        self.expand_override = Some(on);
    }

    /// The pending section-state override, if any. Consuming it keeps the
    /// force to a single frame; afterwards the headers are user-collapsible
    /// again.
    pub fn take_expand_override(&mut self) -> Option<bool> {
        self.expand_override.take()
    }

    /// Set the frequency range, clamping so the bounds stay ordered. The
    /// flag says which bound the user just moved; the other one yields.
    pub fn set_freq_range(&mut self, min: u32, max: u32, min_edited: bool) {
        if min <= max {
            self.filters.freq_min = min;
            self.filters.freq_max = max;
        } else if min_edited {
            self.filters.freq_min = min;
            self.filters.freq_max = min;
        } else {
            self.filters.freq_min = max;
            self.filters.freq_max = max;
        }
        self.refilter();
    }

    /// Rebuild colours and the visible set from the current dataset.
    fn reindex(&mut self) {
        let names: Vec<String> = self
            .dataset
            .categories
            .iter()
            .map(|g| g.name.clone())
            .collect();
        self.category_colors = CategoryColors::new(&names);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CategoryGroup, FrequencyEntry};

    #[test]
    fn default_state_shows_the_whole_builtin_chart() {
        let state = AppState::default();
        assert_eq!(state.visible_indices.len(), state.dataset.len());
        assert_eq!(state.filters, FilterState::default());
    }

    #[test]
    fn set_dataset_resets_filters() {
        let mut state = AppState::default();
        state.set_category(Some("Percussion".into()));
        assert_eq!(state.visible_indices.len(), 6);

        state.set_dataset(ChartDataset {
            entries: vec![FrequencyEntry::new("Cello", "Body at 240Hz")],
            categories: vec![CategoryGroup::new("String", &["Cello"])],
        });
        assert_eq!(state.filters.category, None);
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn crossing_bounds_are_clamped_to_the_edited_one() {
        let mut state = AppState::default();
        state.set_freq_range(5_000, 200, true);
        assert_eq!((state.filters.freq_min, state.filters.freq_max), (5_000, 5_000));
        state.set_freq_range(5_000, 200, false);
        assert_eq!((state.filters.freq_min, state.filters.freq_max), (200, 200));
    }

    #[test]
    fn expand_toggle_overrides_for_exactly_one_frame() {
        let mut state = AppState::default();
        assert_eq!(state.take_expand_override(), None);

        state.set_expand_all(false);
        assert!(!state.expand_all);
        // The override applies on the next frame only; persisted header
        // state takes over again afterwards.
        assert_eq!(state.take_expand_override(), Some(false));
        assert_eq!(state.take_expand_override(), None);

        state.set_expand_all(true);
        assert_eq!(state.take_expand_override(), Some(true));
        assert_eq!(state.take_expand_override(), None);
    }

    #[test]
    fn reset_restores_the_builtin_chart() {
        let mut state = AppState::default();
        state.set_dataset(ChartDataset {
            entries: vec![FrequencyEntry::new("Cello", "Body at 240Hz")],
            categories: vec![],
        });
        state.reset_to_builtin();
        assert_eq!(state.dataset, ChartDataset::builtin());
        assert_eq!(state.visible_indices.len(), 14);
    }
}
