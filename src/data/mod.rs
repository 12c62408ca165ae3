/// Data layer: chart types, frequency extraction, loading, and filtering.
///
/// Architecture:
/// ```text
///  built-in table / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ChartDataset (validated)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ChartDataset  │  Vec<FrequencyEntry>, category index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category + frequency range → filtered indices
///   └──────────┘
/// ```
///
/// `extract` holds the digit-run scanner both the range filter and the
/// per-clause progress bars are built on.

pub mod extract;
pub mod filter;
pub mod loader;
pub mod model;
