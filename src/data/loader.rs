use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{CategoryGroup, ChartDataset, FrequencyEntry};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a chart from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "instrument": ..., "category": ..., "frequencies": ... }, ...]`
/// * `.csv`  – header row `instrument,category,frequencies`
///
/// Categories are formed by grouping records in file order. The result is
/// validated before it is returned, so a chart that references itself
/// inconsistently never reaches the UI.
pub fn load_file(path: &Path) -> Result<ChartDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    dataset.validate().context("chart integrity check")?;
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Record format shared by both loaders
// ---------------------------------------------------------------------------

/// One row of a custom chart file.
#[derive(Debug, Deserialize)]
pub struct ChartRecord {
    pub instrument: String,
    pub category: String,
    pub frequencies: String,
}

/// Assemble a dataset from flat records, grouping categories in file order.
fn from_records(records: Vec<ChartRecord>) -> ChartDataset {
    let mut entries = Vec::with_capacity(records.len());
    let mut categories: Vec<CategoryGroup> = Vec::new();

    for rec in records {
        entries.push(FrequencyEntry::new(&rec.instrument, &rec.frequencies));

        match categories.iter_mut().find(|g| g.name == rec.category) {
            Some(group) => group.instruments.push(rec.instrument),
            None => categories.push(CategoryGroup {
                name: rec.category,
                instruments: vec![rec.instrument],
            }),
        }
    }

    ChartDataset { entries, categories }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "instrument": "Kick drum",
///     "category": "Percussion",
///     "frequencies": "Bottom at 80 to 100Hz, point at 3 to 5kHz"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ChartDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<ChartRecord> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row `instrument,category,frequencies`, one record per
/// chart row. Descriptions contain commas, so fields with clauses must be
/// quoted in the usual CSV way.
fn load_csv(path: &Path) -> Result<ChartDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<ChartRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        // Process-id suffix keeps concurrent test runs (and stale files from
        // aborted ones) from clashing in the shared temp dir.
        let path = std::env::temp_dir().join(format!("{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn json_round_trips_records_in_order() {
        let path = write_temp(
            "magic_freq_test_chart.json",
            r#"[
                {"instrument": "Kalimba", "category": "Percussion",
                 "frequencies": "Ring at 200Hz, sparkle at 2kHz"},
                {"instrument": "Cello", "category": "String",
                 "frequencies": "Body at 240Hz"},
                {"instrument": "Cajon", "category": "Percussion",
                 "frequencies": "Bottom at 80Hz"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.entries[0].instrument, "Kalimba");
        assert_eq!(ds.categories.len(), 2);
        assert_eq!(ds.categories[0].name, "Percussion");
        assert_eq!(ds.categories[0].instruments, vec!["Kalimba", "Cajon"]);
    }

    #[test]
    fn csv_parses_quoted_descriptions() {
        let path = write_temp(
            "magic_freq_test_chart.csv",
            "instrument,category,frequencies\n\
             Kalimba,Percussion,\"Ring at 200Hz, sparkle at 2kHz\"\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(
            ds.entries[0].description,
            "Ring at 200Hz, sparkle at 2kHz"
        );
    }

    #[test]
    fn duplicate_instruments_are_rejected() {
        let path = write_temp(
            "magic_freq_test_dup.json",
            r#"[
                {"instrument": "Cello", "category": "String", "frequencies": "Body at 240Hz"},
                {"instrument": "Cello", "category": "String", "frequencies": "Bite at 2kHz"}
            ]"#,
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp("magic_freq_test_chart.toml", "");
        assert!(load_file(&path).is_err());
    }
}
