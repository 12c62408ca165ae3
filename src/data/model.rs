use thiserror::Error;

// ---------------------------------------------------------------------------
// FrequencyEntry – one row of the chart
// ---------------------------------------------------------------------------

/// A single chart row: an instrument and its free-text frequency description.
///
/// The description is a `", "`-separated list of clauses, each typically of
/// the form `"<quality> at <value>Hz"` (or `kHz`). The text is never edited
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub instrument: String,
    pub description: String,
}

impl FrequencyEntry {
    pub fn new(instrument: &str, description: &str) -> Self {
        FrequencyEntry {
            instrument: instrument.to_string(),
            description: description.to_string(),
        }
    }

    /// The `", "`-separated clauses of the description, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &str> {
        self.description.split(", ")
    }
}

// ---------------------------------------------------------------------------
// CategoryGroup – ordered category → instruments index
// ---------------------------------------------------------------------------

/// A named instrument category and the entries it groups.
/// Order matters for the UI, so this is a `Vec` of pairs rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub instruments: Vec<String>,
}

impl CategoryGroup {
    pub fn new(name: &str, instruments: &[&str]) -> Self {
        CategoryGroup {
            name: name.to_string(),
            instruments: instruments.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChartDataset – the complete chart
// ---------------------------------------------------------------------------

/// Integrity failures detected by [`ChartDataset::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("category '{category}' references unknown instrument '{instrument}'")]
    UnknownInstrument { category: String, instrument: String },
    #[error("duplicate instrument '{0}'")]
    DuplicateInstrument(String),
}

/// The full chart: entries in display order plus the category index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDataset {
    /// All rows, in display order.
    pub entries: Vec<FrequencyEntry>,
    /// Ordered category index. Every referenced instrument must exist in
    /// `entries`; see [`ChartDataset::validate`].
    pub categories: Vec<CategoryGroup>,
}

impl ChartDataset {
    /// The built-in reference table.
    pub fn builtin() -> Self {
        let entries = vec![
            FrequencyEntry::new(
                "Bass guitar",
                "Bottom at 50 to 80Hz, attack at 700Hz, snap at 2.5kHz",
            ),
            FrequencyEntry::new(
                "Kick drum",
                "Bottom at 80 to 100Hz, hollowness at 400Hz, point at 3 to 5kHz",
            ),
            FrequencyEntry::new(
                "Snare",
                "Fatness at 120 to 240Hz, point at 900Hz, crispness at 5kHz, snap at 10kHz",
            ),
            FrequencyEntry::new(
                "Toms",
                "Fullness at 240 to 500Hz, attack at 5 to 7kHz",
            ),
            FrequencyEntry::new(
                "Floor tom",
                "Fullness at 80Hz, attack at 5kHz",
            ),
            FrequencyEntry::new(
                "Hi-hat and cymbals",
                "Clang at 200Hz, sparkle at 8 to 10kHz",
            ),
            FrequencyEntry::new(
                "Electric guitar",
                "Fullness at 240 to 500Hz, presence at 1.5 to 2.5kHz, \
                 attenuate at 1kHz for 4x12 cabinet sound",
            ),
            FrequencyEntry::new(
                "Acoustic guitar",
                "Fullness at 80Hz, body at 240Hz, presence at 2 to 5kHz",
            ),
            FrequencyEntry::new(
                "Organ",
                "Fullness at 80Hz, body at 240Hz, presence at 2 to 5kHz",
            ),
            FrequencyEntry::new(
                "Piano",
                "Fullness at 80Hz, presence at 3 to 5kHz, honky-tonk at 2.5kHz",
            ),
            FrequencyEntry::new(
                "Horns",
                "Fullness at 120Hz, piercing at 5kHz",
            ),
            FrequencyEntry::new(
                "Voice",
                "Fullness at 120Hz, boomy at 240Hz, presence at 5kHz, \
                 sibilance at 4 to 7kHz, air at 10 to 15kHz",
            ),
            FrequencyEntry::new(
                "Strings",
                "Fullness at 240Hz, scratchy at 7 to 10kHz",
            ),
            FrequencyEntry::new(
                "Conga",
                "Ring at 200Hz, slap at 5kHz",
            ),
        ];

        let categories = vec![
            CategoryGroup::new(
                "Percussion",
                &["Kick drum", "Snare", "Toms", "Floor tom", "Hi-hat and cymbals", "Conga"],
            ),
            CategoryGroup::new(
                "String",
                &["Bass guitar", "Electric guitar", "Acoustic guitar", "Piano", "Strings"],
            ),
            CategoryGroup::new("Wind", &["Horns"]),
            CategoryGroup::new("Voice", &["Voice"]),
            CategoryGroup::new("Other", &["Organ"]),
        ];

        ChartDataset { entries, categories }
    }

    /// Check category → instrument integrity: every instrument referenced by
    /// a category must exist as a row, and instrument names must be unique.
    pub fn validate(&self) -> Result<(), ChartError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.instrument == entry.instrument) {
                return Err(ChartError::DuplicateInstrument(entry.instrument.clone()));
            }
        }
        for group in &self.categories {
            for name in &group.instruments {
                if !self.entries.iter().any(|e| &e.instrument == name) {
                    return Err(ChartError::UnknownInstrument {
                        category: group.name.clone(),
                        instrument: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The category a given instrument belongs to, if any.
    pub fn category_of(&self, instrument: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|g| g.instruments.iter().any(|n| n == instrument))
            .map(|g| g.name.as_str())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chart has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
