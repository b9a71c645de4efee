use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{IrisDataset, IrisRow, NUMERIC_COLUMNS, SPECIES_COLUMN, Species};

/// The Iris table shipped with the binary.
const EMBEDDED_CSV: &str = include_str!("../../data/iris.csv");

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Structural problems with a source file. Anything else (I/O, malformed
/// cells) surfaces as a plain `anyhow` error with context.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("dataset contains no rows")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the embedded Iris dataset. Called once at startup; a failure here
/// is fatal (the binary ships its own data, so it indicates a build problem).
pub fn load_embedded() -> Result<IrisDataset> {
    read_csv(EMBEDDED_CSV.as_bytes()).context("loading embedded iris.csv")
}

/// Load an Iris-shaped dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the measurement columns and `species`
/// * `.json`    – `[{ "sepal_length_cm": ..., ..., "species": "setosa" }, ...]`
/// * `.parquet` – scalar Float64 measurement columns plus a Utf8 `species`
pub fn load_file(path: &Path) -> Result<IrisDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            read_csv(file)
        }
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Enforce the zero-row degenerate case once, for every format.
fn finish(rows: Vec<IrisRow>) -> Result<IrisDataset> {
    if rows.is_empty() {
        return Err(LoadError::EmptyDataset.into());
    }
    Ok(IrisDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. The four measurement columns
/// and `species` are required; anything else (notably the unnamed index
/// column pandas writes as the first field) is dropped.
fn read_csv<R: Read>(source: R) -> Result<IrisDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column_index = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name).into())
    };

    let numeric_idx: Vec<usize> = NUMERIC_COLUMNS
        .iter()
        .map(|&name| column_index(name))
        .collect::<Result<_>>()?;
    let species_idx = column_index(SPECIES_COLUMN)?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let cell = |idx: usize, name: &str| -> Result<f64> {
            let raw = record.get(idx).unwrap_or("");
            raw.trim()
                .parse::<f64>()
                .with_context(|| format!("Row {row_no}, {name}: '{raw}' is not a number"))
        };

        let species_raw = record.get(species_idx).unwrap_or("");
        let species: Species = species_raw
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .with_context(|| format!("Row {row_no}"))?;

        rows.push(IrisRow {
            sepal_length_cm: cell(numeric_idx[0], NUMERIC_COLUMNS[0])?,
            sepal_width_cm: cell(numeric_idx[1], NUMERIC_COLUMNS[1])?,
            petal_length_cm: cell(numeric_idx[2], NUMERIC_COLUMNS[2])?,
            petal_width_cm: cell(numeric_idx[3], NUMERIC_COLUMNS[3])?,
            species,
        });
    }

    finish(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "sepal_length_cm": 5.1,
///     "sepal_width_cm": 3.5,
///     "petal_length_cm": 1.4,
///     "petal_width_cm": 0.2,
///     "species": "setosa"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<IrisDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<IrisRow> = serde_json::from_str(&text).context("parsing JSON records")?;
    finish(rows)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with scalar measurement columns.
///
/// Expected schema:
/// - `sepal_length_cm` .. `petal_width_cm`: Float64 (or Float32)
/// - `species`: Utf8
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); extra columns are ignored.
fn load_parquet(path: &Path) -> Result<IrisDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let numeric_cols: Vec<&Arc<dyn Array>> = NUMERIC_COLUMNS
            .iter()
            .map(|&name| {
                schema
                    .index_of(name)
                    .map(|i| batch.column(i))
                    .map_err(|_| LoadError::MissingColumn(name).into())
            })
            .collect::<Result<_>>()?;
        let species_col = schema
            .index_of(SPECIES_COLUMN)
            .map(|i| batch.column(i))
            .map_err(|_| anyhow::Error::from(LoadError::MissingColumn(SPECIES_COLUMN)))?;

        for row in 0..batch.num_rows() {
            let mut values = [0.0f64; 4];
            for (slot, (col, name)) in values
                .iter_mut()
                .zip(numeric_cols.iter().copied().zip(NUMERIC_COLUMNS))
            {
                *slot = extract_f64(col, row)
                    .with_context(|| format!("Row {row}: failed to read '{name}'"))?;
            }

            let species = extract_species(species_col, row)
                .with_context(|| format!("Row {row}: failed to read 'species'"))?;

            rows.push(IrisRow {
                sepal_length_cm: values[0],
                sepal_width_cm: values[1],
                petal_length_cm: values[2],
                petal_width_cm: values[3],
                species,
            });
        }
    }

    finish(rows)
}

// -- Parquet / Arrow helpers --

/// Extract a scalar `f64` from a Float64 or Float32 column at the given row.
fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        other => bail!("Expected Float64 or Float32 column, got {other:?}"),
    }
}

/// Extract the species label from a Utf8 column at the given row.
fn extract_species(col: &Arc<dyn Array>, row: usize) -> Result<Species> {
    if col.is_null(row) {
        bail!("null value in species column");
    }
    let arr = col
        .as_any()
        .downcast_ref::<StringArray>()
        .context("expected Utf8 species column")?;
    arr.value(row).parse().map_err(|e: String| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_has_150_rows() {
        let ds = load_embedded().unwrap();
        assert_eq!(ds.len(), 150);
        let first = &ds.rows()[0];
        assert_eq!(first.sepal_length_cm, 5.1);
        assert_eq!(first.petal_length_cm, 1.4);
        assert_eq!(first.species, Species::Setosa);
    }

    #[test]
    fn missing_column_is_a_typed_error() {
        let csv = ",sepal_length_cm,sepal_width_cm,petal_length_cm,species\n0,5.1,3.5,1.4,setosa\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn(col)) => assert_eq!(*col, "petal_width_cm"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn zero_rows_is_a_typed_error() {
        let csv = ",sepal_length_cm,sepal_width_cm,petal_length_cm,petal_width_cm,species\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::EmptyDataset)
        ));
    }

    #[test]
    fn malformed_cell_reports_row_and_column() {
        let csv = "sepal_length_cm,sepal_width_cm,petal_length_cm,petal_width_cm,species\n\
                   5.1,3.5,oops,0.2,setosa\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("petal_length_cm"));
        assert!(msg.contains("oops"));
    }

    #[test]
    fn unknown_species_is_rejected() {
        let csv = "sepal_length_cm,sepal_width_cm,petal_length_cm,petal_width_cm,species\n\
                   5.1,3.5,1.4,0.2,tulip\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("tulip"));
    }

    #[test]
    fn json_records_parse() {
        let json = r#"[
            {"sepal_length_cm": 5.1, "sepal_width_cm": 3.5,
             "petal_length_cm": 1.4, "petal_width_cm": 0.2, "species": "setosa"}
        ]"#;
        let rows: Vec<IrisRow> = serde_json::from_str(json).unwrap();
        let ds = finish(rows).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows()[0].species, Species::Setosa);
    }
}
