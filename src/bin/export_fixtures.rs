//! Convert the bundled Iris CSV into `.json` and `.parquet` fixtures, so the
//! alternate loaders can be exercised against real files:
//!
//! ```sh
//! cargo run --bin export_fixtures
//! ```

use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::json;

const IRIS_CSV: &str = include_str!("../../data/iris.csv");

const NUMERIC_COLUMNS: [&str; 4] = [
    "sepal_length_cm",
    "sepal_width_cm",
    "petal_length_cm",
    "petal_width_cm",
];

fn main() {
    let mut reader = csv::Reader::from_reader(IRIS_CSV.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .expect("reading CSV headers")
        .iter()
        .map(|h| h.to_string())
        .collect();

    let numeric_idx: Vec<usize> = NUMERIC_COLUMNS
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h == name)
                .unwrap_or_else(|| panic!("bundled CSV missing '{name}'"))
        })
        .collect();
    let species_idx = headers
        .iter()
        .position(|h| h == "species")
        .expect("bundled CSV missing 'species'");

    // Columnar buffers for the Arrow writer; rows reused for JSON.
    let mut numeric: [Vec<f64>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    let mut species: Vec<String> = Vec::new();

    for result in reader.records() {
        let record = result.expect("reading CSV record");
        for (slot, &idx) in numeric.iter_mut().zip(&numeric_idx) {
            let raw = record.get(idx).unwrap_or("");
            slot.push(raw.trim().parse().unwrap_or_else(|_| {
                panic!("'{raw}' is not a number");
            }));
        }
        species.push(record.get(species_idx).unwrap_or("").to_string());
    }
    let n_rows = species.len();

    // ---- JSON (records-oriented) ----
    let records: Vec<serde_json::Value> = (0..n_rows)
        .map(|i| {
            json!({
                NUMERIC_COLUMNS[0]: numeric[0][i],
                NUMERIC_COLUMNS[1]: numeric[1][i],
                NUMERIC_COLUMNS[2]: numeric[2][i],
                NUMERIC_COLUMNS[3]: numeric[3][i],
                "species": species[i],
            })
        })
        .collect();
    let json_path = "data/iris.json";
    std::fs::write(
        json_path,
        serde_json::to_string_pretty(&records).expect("serialising JSON"),
    )
    .expect("writing JSON fixture");

    // ---- Parquet ----
    let mut fields: Vec<Field> = NUMERIC_COLUMNS
        .iter()
        .map(|name| Field::new(*name, DataType::Float64, false))
        .collect();
    fields.push(Field::new("species", DataType::Utf8, false));
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<Arc<dyn arrow::array::Array>> = numeric
        .iter()
        .map(|values| Arc::new(Float64Array::from(values.clone())) as _)
        .collect();
    columns.push(Arc::new(StringArray::from(
        species.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    )));

    let batch = RecordBatch::try_new(schema.clone(), columns).expect("Failed to create RecordBatch");

    let parquet_path = "data/iris.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n_rows} rows to {json_path} and {parquet_path}");
}
