//! Loading input data from CSV or JSON files.
//!
//! The format is chosen by file extension:
//!
//! - `.csv`: a header row of column names followed by numeric rows, loaded
//!   as a [`Table`].
//! - `.json`: a number array (`Series`), an array of two or three number
//!   arrays (`Columns` as x, y and optional z), or an object mapping column
//!   names to number arrays (`Table`).

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use sonify_audio::{DataSource, Table};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Recognized CSV extensions.
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

/// Recognized JSON extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if CSV_EXTENSIONS.contains(&ext.as_str()) {
            Some(DataFormat::Csv)
        } else if JSON_EXTENSIONS.contains(&ext.as_str()) {
            Some(DataFormat::Json)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
        }
    }
}

/// Reads and parses a data file.
pub fn load_data(path: &Path) -> Result<DataSource> {
    let format = DataFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "unsupported input file '{}' (expected .csv or .json)",
            path.display()
        )
    })?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let source = match format {
        DataFormat::Csv => parse_csv(&text).map(DataSource::Table),
        DataFormat::Json => parse_json(&text),
    };
    source.with_context(|| format!("Failed to parse {} input: {}", format.as_str(), path.display()))
}

/// Parses CSV text with a header row into named columns.
pub fn parse_csv(text: &str) -> Result<Table> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or_else(|| anyhow!("CSV input is empty"))?;
    let names: Vec<String> = header.split(',').map(|cell| unquote(cell).to_string()).collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for (line_no, line) in lines {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != names.len() {
            bail!(
                "line {}: expected {} fields, found {}",
                line_no,
                names.len(),
                cells.len()
            );
        }
        for ((cell, name), column) in cells.iter().zip(&names).zip(columns.iter_mut()) {
            let cell = unquote(cell);
            let value: f64 = cell.parse().map_err(|_| {
                anyhow!("line {}, column '{}': invalid number '{}'", line_no, name, cell)
            })?;
            column.push(value);
        }
    }

    Ok(names.into_iter().zip(columns).collect())
}

fn unquote(cell: &str) -> &str {
    cell.trim().trim_matches('"')
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonData {
    Series(Vec<f64>),
    Columns(Vec<Vec<f64>>),
    Table(BTreeMap<String, Vec<f64>>),
}

/// Parses JSON data in one of the three accepted shapes.
pub fn parse_json(text: &str) -> Result<DataSource> {
    let data: JsonData = serde_json::from_str(text).context(
        "expected a number array, an array of 2 or 3 number arrays, or an object of number arrays",
    )?;
    Ok(match data {
        JsonData::Series(values) => DataSource::Series(values),
        JsonData::Columns(columns) => {
            let count = columns.len();
            let mut iter = columns.into_iter();
            match (iter.next(), iter.next(), iter.next(), iter.next()) {
                (Some(x), Some(y), z, None) => DataSource::Columns { x, y, z },
                _ => bail!("expected 2 or 3 column arrays, found {}", count),
            }
        }
        JsonData::Table(columns) => DataSource::Table(columns.into_iter().collect()),
    })
}
