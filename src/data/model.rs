use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Species – the categorical column
// ---------------------------------------------------------------------------

/// One of the three Iris species present in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// All species, in the order the source file lists them.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Capitalised label for UI widgets.
    pub fn label(&self) -> &'static str {
        match self {
            Species::Setosa => "Setosa",
            Species::Versicolor => "Versicolor",
            Species::Virginica => "Virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lowercase, matching the cell values in the source file.
        let s = match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "setosa" => Ok(Species::Setosa),
            "versicolor" => Ok(Species::Versicolor),
            "virginica" => Ok(Species::Virginica),
            other => Err(format!("unknown species '{other}'")),
        }
    }
}

impl TryFrom<String> for Species {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// IrisRow – one row of the table
// ---------------------------------------------------------------------------

/// Ordered list of the numeric measurement columns.
pub const NUMERIC_COLUMNS: [&str; 4] = [
    "sepal_length_cm",
    "sepal_width_cm",
    "petal_length_cm",
    "petal_width_cm",
];

/// Name of the categorical column.
pub const SPECIES_COLUMN: &str = "species";

/// A single flower measurement (one row of the source table).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IrisRow {
    pub sepal_length_cm: f64,
    pub sepal_width_cm: f64,
    pub petal_length_cm: f64,
    pub petal_width_cm: f64,
    pub species: Species,
}

impl IrisRow {
    /// Measurement for the numeric column at `idx` (order of [`NUMERIC_COLUMNS`]).
    pub fn numeric(&self, idx: usize) -> f64 {
        match idx {
            0 => self.sepal_length_cm,
            1 => self.sepal_width_cm,
            2 => self.petal_length_cm,
            _ => self.petal_width_cm,
        }
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once at startup and never mutated;
/// everything downstream derives transient views from it.
#[derive(Debug, Clone)]
pub struct IrisDataset {
    rows: Vec<IrisRow>,
}

impl IrisDataset {
    pub fn from_rows(rows: Vec<IrisRow>) -> Self {
        IrisDataset { rows }
    }

    pub fn rows(&self) -> &[IrisRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the numeric column at `idx`, in row order.
    pub fn numeric_column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r.numeric(idx)).collect()
    }
}
