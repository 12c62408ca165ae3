use super::extract::{extract_frequencies, FREQ_CEILING_HZ};
use super::model::ChartDataset;

// ---------------------------------------------------------------------------
// Filter predicate: category selection + frequency range
// ---------------------------------------------------------------------------

/// The two filter dimensions, owned by the UI and passed by reference into
/// [`filtered_indices`]. Rebuilt from the widgets on every interaction;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// `None` means "All" – no category constraint.
    pub category: Option<String>,
    /// Inclusive lower bound, Hz.
    pub freq_min: u32,
    /// Inclusive upper bound, Hz. The slider widgets keep `freq_min <= freq_max`.
    pub freq_max: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            category: None,
            freq_min: 0,
            freq_max: FREQ_CEILING_HZ,
        }
    }
}

/// Return indices of entries that pass both filters, in dataset order.
///
/// An entry passes when:
/// * no category is selected, or its instrument is listed under the
///   selected category; and
/// * at least one integer extracted from its full description falls within
///   `[freq_min, freq_max]`. A description without numeric tokens never
///   passes the range filter.
///
/// Pure function of `(dataset, filters)`; an empty result is valid and
/// renders as an empty chart.
pub fn filtered_indices(dataset: &ChartDataset, filters: &FilterState) -> Vec<usize> {
    let category_members: Option<&[String]> = filters.category.as_deref().and_then(|name| {
        dataset
            .categories
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.instruments.as_slice())
    });

    dataset
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            if let Some(members) = category_members {
                if !members.iter().any(|n| n == &entry.instrument) {
                    return false;
                }
            } else if filters.category.is_some() {
                // Selected category is not in the index → nothing matches.
                return false;
            }
            extract_frequencies(&entry.description)
                .iter()
                .any(|&f| filters.freq_min <= f && f <= filters.freq_max)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FrequencyEntry;

    fn names(dataset: &ChartDataset, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| dataset.entries[i].instrument.clone())
            .collect()
    }

    fn range(min: u32, max: u32) -> FilterState {
        FilterState {
            category: None,
            freq_min: min,
            freq_max: max,
        }
    }

    #[test]
    fn no_category_full_range_is_identity() {
        let ds = ChartDataset::builtin();
        let indices = filtered_indices(&ds, &FilterState::default());
        assert_eq!(indices, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn percussion_full_range_keeps_the_six_drums_in_order() {
        let ds = ChartDataset::builtin();
        let filters = FilterState {
            category: Some("Percussion".into()),
            ..FilterState::default()
        };
        assert_eq!(
            names(&ds, &filtered_indices(&ds, &filters)),
            vec![
                "Kick drum",
                "Snare",
                "Toms",
                "Floor tom",
                "Hi-hat and cymbals",
                "Conga",
            ]
        );
    }

    #[test]
    fn sub_100_range_keeps_every_row() {
        // Every built-in description contains a digit run below 100 once the
        // kHz digits split (e.g. the 2 and 5 of "2.5kHz"), so [0, 100]
        // filters nothing out.
        let ds = ChartDataset::builtin();
        assert_eq!(filtered_indices(&ds, &range(0, 100)).len(), ds.len());
    }

    #[test]
    fn mid_range_is_selective() {
        let ds = ChartDataset::builtin();
        assert_eq!(
            names(&ds, &filtered_indices(&ds, &range(300, 600))),
            vec!["Kick drum", "Toms", "Electric guitar"]
        );
    }

    #[test]
    fn top_band_is_empty() {
        // No description carries a bare numeric token in [14000, 15000]:
        // "15kHz" contributes 15, not 15000.
        let ds = ChartDataset::builtin();
        assert!(filtered_indices(&ds, &range(14_000, 15_000)).is_empty());
    }

    #[test]
    fn entry_without_digits_is_dropped_by_the_range_filter() {
        let mut ds = ChartDataset::builtin();
        ds.entries
            .push(FrequencyEntry::new("Triangle", "bright and airy"));
        let indices = filtered_indices(&ds, &FilterState::default());
        assert!(!names(&ds, &indices).contains(&"Triangle".to_string()));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let ds = ChartDataset::builtin();
        let filters = FilterState {
            category: Some("Brass".into()),
            ..FilterState::default()
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = ChartDataset::builtin();
        let filters = FilterState {
            category: Some("String".into()),
            freq_min: 0,
            freq_max: 300,
        };
        let first = filtered_indices(&ds, &filters);
        let second = filtered_indices(&ds, &filters);
        assert_eq!(first, second);
    }
}
