use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// One launch, serialised with the dashboard's column names.
#[derive(Debug, Serialize)]
struct SampleRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: Option<f64>,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'static str,
}

/// Booster eras: category, first flight, payload ceiling (kg), success rate.
const ERAS: [(&str, u32, f64, f64); 5] = [
    ("v1.0", 1, 700.0, 0.0),
    ("v1.1", 6, 4500.0, 0.2),
    ("FT", 21, 6500.0, 0.7),
    ("B4", 40, 7000.0, 0.75),
    ("B5", 48, 9600.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

const N_FLIGHTS: u32 = 56;

/// splitmix64: deterministic, good enough for sample data.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn generate_rows(rng: &mut SampleRng) -> Vec<SampleRow> {
    (1..=N_FLIGHTS)
        .map(|flight| {
            let (category, _, ceiling, success_rate) = ERAS
                .iter()
                .rev()
                .find(|(_, first, _, _)| flight >= *first)
                .copied()
                .unwrap_or(ERAS[0]);

            // Early flights flew from the Cape only; later ones spread out.
            let site = if flight <= 5 {
                SITES[0]
            } else {
                SITES[(rng.next_u64() % SITES.len() as u64) as usize]
            };

            // A few demo flights carried no recorded payload.
            let payload_mass_kg = if flight > 1 && rng.next_f64() < 0.05 {
                None
            } else if flight == 1 {
                Some(0.0)
            } else {
                Some((rng.next_f64() * ceiling).round())
            };

            SampleRow {
                flight_number: flight,
                launch_site: site,
                class: u8::from(rng.next_f64() < success_rate),
                payload_mass_kg,
                booster_version: format!("F9 {category} B{}", 1000 + flight),
                booster_version_category: category,
            }
        })
        .collect()
}

fn to_batch(rows: &[SampleRow]) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::UInt32, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, true),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(UInt32Array::from_iter_values(rows.iter().map(|r| r.flight_number))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.launch_site))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| i64::from(r.class)))),
            Arc::new(rows.iter().map(|r| r.payload_mass_kg).collect::<Float64Array>()),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.booster_version.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(
                rows.iter().map(|r| r.booster_version_category),
            )),
        ],
    )
    .context("building record batch")
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);
    let rows = generate_rows(&mut rng);

    // CSV, the file the dashboard looks for by default
    let csv_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV output")?;
    for row in &rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;

    // Parquet, same columns
    let batch = to_batch(&rows)?;
    let parquet_path = "spacex_launch_dash.parquet";
    let file = std::fs::File::create(parquet_path).context("creating Parquet output")?;
    let mut parquet_writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating Parquet writer")?;
    parquet_writer.write(&batch).context("writing Parquet batch")?;
    parquet_writer.close().context("closing Parquet writer")?;

    let preview = pretty_format_batches(&[batch.slice(0, batch.num_rows().min(8))])
        .context("formatting preview")?;
    println!("{preview}");
    println!(
        "Wrote {} launches to {csv_path} and {parquet_path} ({} successful)",
        rows.len(),
        rows.iter().filter(|r| r.class == 1).count()
    );
    Ok(())
}
