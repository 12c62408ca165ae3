//! Writes a small custom chart file for trying File → Open in the viewer.

use serde::Serialize;

#[derive(Serialize)]
struct ChartRecord {
    instrument: &'static str,
    category: &'static str,
    frequencies: &'static str,
}

fn main() -> anyhow::Result<()> {
    let records = vec![
        ChartRecord {
            instrument: "Cajon",
            category: "Percussion",
            frequencies: "Bottom at 80 to 100Hz, slap at 2 to 4kHz",
        },
        ChartRecord {
            instrument: "Kalimba",
            category: "Percussion",
            frequencies: "Ring at 200Hz, sparkle at 2kHz",
        },
        ChartRecord {
            instrument: "Cello",
            category: "String",
            frequencies: "Body at 240Hz, bite at 2 to 3kHz",
        },
        ChartRecord {
            instrument: "Harmonica",
            category: "Wind",
            frequencies: "Honk at 1 to 2kHz, breath at 5kHz",
        },
    ];

    let output_path = "sample_chart.json";
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(output_path, json)?;

    println!("Wrote {} instruments to {output_path}", records.len());
    Ok(())
}
