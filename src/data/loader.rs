use std::fmt;
use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::{DataLoadError, LoadResult};
use super::model::{
    LaunchDataset, LaunchRecord, Outcome, BOOSTER_CATEGORY_COLUMN, BOOSTER_VERSION_COLUMN,
    FLIGHT_NUMBER_COLUMN, LAUNCH_SITE_COLUMN, OUTCOME_COLUMN, PAYLOAD_MASS_COLUMN,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch columns (the canonical export)
/// * `.json`    – `[{ "Launch Site": "...", "class": 1, ... }, ...]`
/// * `.parquet` – flat table with the same column names
pub fn load_file(path: &Path) -> LoadResult<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedExtension(other.to_string())),
    };

    log::debug!(
        "parsed {} launches from {} (payload bounds {:?})",
        dataset.len(),
        path.display(),
        dataset.payload_bounds()
    );
    Ok(dataset)
}

fn open(path: &Path) -> LoadResult<File> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Cell values shared by all three readers
// ---------------------------------------------------------------------------

/// A raw cell before it is checked against the column contract.
#[derive(Debug, Clone, PartialEq)]
enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

/// The cells of one row that the dashboard cares about.
struct RowCells {
    site: CellValue,
    payload: CellValue,
    outcome: CellValue,
    category: CellValue,
    flight_number: CellValue,
    booster_version: CellValue,
}

fn invalid(row: usize, column: &str, cell: &CellValue) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column: column.to_string(),
        value: cell.to_string(),
    }
}

impl RowCells {
    fn into_record(self, row: usize) -> LoadResult<LaunchRecord> {
        Ok(LaunchRecord {
            launch_site: label_cell(row, LAUNCH_SITE_COLUMN, self.site)?,
            payload_mass_kg: payload_cell(row, self.payload)?,
            outcome: outcome_cell(row, self.outcome)?,
            booster_version_category: label_cell(row, BOOSTER_CATEGORY_COLUMN, self.category)?,
            flight_number: flight_number_cell(row, self.flight_number)?,
            booster_version: match self.booster_version {
                CellValue::Null => None,
                other => Some(label_cell(row, BOOSTER_VERSION_COLUMN, other)?),
            },
        })
    }
}

/// Non-empty text label. Numeric labels are kept in their written form.
fn label_cell(row: usize, column: &str, cell: CellValue) -> LoadResult<String> {
    match cell {
        CellValue::Text(s) if !s.trim().is_empty() => Ok(s),
        CellValue::Integer(i) => Ok(i.to_string()),
        CellValue::Float(f) if f.is_finite() => Ok(f.to_string()),
        other => Err(invalid(row, column, &other)),
    }
}

fn outcome_cell(row: usize, cell: CellValue) -> LoadResult<Outcome> {
    let outcome = match &cell {
        CellValue::Integer(i) => Outcome::from_flag(*i as f64),
        CellValue::Float(f) => Outcome::from_flag(*f),
        CellValue::Bool(true) => Some(Outcome::Success),
        CellValue::Bool(false) => Some(Outcome::Failure),
        CellValue::Text(s) => s.trim().parse::<f64>().ok().and_then(Outcome::from_flag),
        CellValue::Null => None,
    };
    outcome.ok_or_else(|| invalid(row, OUTCOME_COLUMN, &cell))
}

/// Empty, null and NaN cells mean "no payload recorded".
fn payload_cell(row: usize, cell: CellValue) -> LoadResult<Option<f64>> {
    let mass = match &cell {
        CellValue::Null => return Ok(None),
        CellValue::Integer(i) => *i as f64,
        CellValue::Float(f) => *f,
        CellValue::Text(s) if s.trim().is_empty() => return Ok(None),
        CellValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(f) => f,
            Err(_) => return Err(invalid(row, PAYLOAD_MASS_COLUMN, &cell)),
        },
        CellValue::Bool(_) => return Err(invalid(row, PAYLOAD_MASS_COLUMN, &cell)),
    };

    if mass.is_nan() {
        Ok(None)
    } else if mass.is_finite() && mass >= 0.0 {
        Ok(Some(mass))
    } else {
        Err(invalid(row, PAYLOAD_MASS_COLUMN, &cell))
    }
}

fn flight_number_cell(row: usize, cell: CellValue) -> LoadResult<Option<u32>> {
    let number = match &cell {
        CellValue::Null => return Ok(None),
        CellValue::Text(s) if s.trim().is_empty() => return Ok(None),
        CellValue::Integer(i) => u32::try_from(*i).ok(),
        CellValue::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
            Some(*f as u32)
        }
        CellValue::Text(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    number
        .map(Some)
        .ok_or_else(|| invalid(row, FLIGHT_NUMBER_COLUMN, &cell))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Unknown columns (e.g. a leading unnamed index column) are ignored.
fn load_csv(path: &Path) -> LoadResult<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let required = |name: &str| -> LoadResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
    };
    let optional = |name: &str| headers.iter().position(|h| h == name);

    let site_idx = required(LAUNCH_SITE_COLUMN)?;
    let payload_idx = required(PAYLOAD_MASS_COLUMN)?;
    let outcome_idx = required(OUTCOME_COLUMN)?;
    let category_idx = required(BOOSTER_CATEGORY_COLUMN)?;
    let flight_idx = optional(FLIGHT_NUMBER_COLUMN);
    let version_idx = optional(BOOSTER_VERSION_COLUMN);

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: Option<usize>| -> CellValue {
            match idx.and_then(|i| record.get(i)) {
                Some(s) if !s.is_empty() => CellValue::Text(s.to_string()),
                _ => CellValue::Null,
            }
        };

        let cells = RowCells {
            site: cell(Some(site_idx)),
            payload: cell(Some(payload_idx)),
            outcome: cell(Some(outcome_idx)),
            category: cell(Some(category_idx)),
            flight_number: cell(flight_idx),
            booster_version: cell(version_idx),
        };
        records.push(cells.into_record(row_no)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> LoadResult<LaunchDataset> {
    let root: JsonValue = serde_json::from_reader(std::io::BufReader::new(open(path)?))?;

    let rows = root.as_array().ok_or_else(|| DataLoadError::Malformed {
        row: 0,
        message: "expected top-level JSON array".to_string(),
    })?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| DataLoadError::Malformed {
            row: i,
            message: "not a JSON object".to_string(),
        })?;

        let required = |name: &str| -> LoadResult<CellValue> {
            obj.get(name)
                .map(json_to_cell)
                .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };
        let optional = |name: &str| obj.get(name).map(json_to_cell).unwrap_or(CellValue::Null);

        let cells = RowCells {
            site: required(LAUNCH_SITE_COLUMN)?,
            payload: required(PAYLOAD_MASS_COLUMN)?,
            outcome: required(OUTCOME_COLUMN)?,
            category: required(BOOSTER_CATEGORY_COLUMN)?,
            flight_number: optional(FLIGHT_NUMBER_COLUMN),
            booster_version: optional(BOOSTER_VERSION_COLUMN),
        };
        records.push(cells.into_record(i)?);
    }

    Ok(LaunchDataset::from_records(records))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) if s.is_empty() => CellValue::Null,
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet table of launches.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); integer, float, string and dictionary
/// encoded columns are all accepted.
fn load_parquet(path: &Path) -> LoadResult<LaunchDataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;

    // Checked against the file schema so that files without rows are validated too.
    let schema = builder.schema().clone();
    let required = |name: &str| -> LoadResult<usize> {
        schema
            .index_of(name)
            .map_err(|_| DataLoadError::MissingColumn(name.to_string()))
    };
    let optional = |name: &str| schema.index_of(name).ok();

    let site_idx = required(LAUNCH_SITE_COLUMN)?;
    let payload_idx = required(PAYLOAD_MASS_COLUMN)?;
    let outcome_idx = required(OUTCOME_COLUMN)?;
    let category_idx = required(BOOSTER_CATEGORY_COLUMN)?;
    let flight_idx = optional(FLIGHT_NUMBER_COLUMN);
    let version_idx = optional(BOOSTER_VERSION_COLUMN);

    let reader = builder.build()?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;

        let site_col = batch.column(site_idx);
        let payload_col = batch.column(payload_idx);
        let outcome_col = batch.column(outcome_idx);
        let category_col = batch.column(category_idx);
        let flight_col = flight_idx.map(|i| batch.column(i));
        let version_col = version_idx.map(|i| batch.column(i));

        for row in 0..batch.num_rows() {
            let row_no = records.len();
            let cells = RowCells {
                site: arrow_cell(site_col, row)?,
                payload: arrow_cell(payload_col, row)?,
                outcome: arrow_cell(outcome_col, row)?,
                category: arrow_cell(category_col, row)?,
                flight_number: match flight_col {
                    Some(col) => arrow_cell(col, row)?,
                    None => CellValue::Null,
                },
                booster_version: match version_col {
                    Some(col) => arrow_cell(col, row)?,
                    None => CellValue::Null,
                },
            };
            records.push(cells.into_record(row_no)?);
        }
    }

    Ok(LaunchDataset::from_records(records))
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_cell(col: &ArrayRef, row: usize) -> LoadResult<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let cell = match col.data_type() {
        DataType::Utf8 => CellValue::Text(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::Text(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        // Dictionary strings, small ints, decimals: go through their display form.
        _ => CellValue::Text(array_value_to_string(col.as_ref(), row)?),
    };
    Ok(match cell {
        CellValue::Text(s) if s.is_empty() => CellValue::Null,
        other => other,
    })
}
