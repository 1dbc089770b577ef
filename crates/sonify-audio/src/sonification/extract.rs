//! Turning input data into `x`/`y`/`z` columns.

use std::collections::BTreeMap;

use sonify_spec::ColumnNames;

use crate::error::{AudioError, AudioResult};

/// Column names used to pick series out of a [`Table`].
pub type ColumnSelection = ColumnNames;

/// Named numeric columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: BTreeMap<String, Vec<f64>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a column.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.insert(name.into(), values);
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for Table {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(name, values)| (name.into(), values))
                .collect(),
        }
    }
}

/// Input data accepted by the mapper.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A single sequence; its values are `y` and their indices are `x`.
    Series(Vec<f64>),
    /// Columns that are already split out.
    Columns {
        x: Vec<f64>,
        y: Vec<f64>,
        z: Option<Vec<f64>>,
    },
    /// Named columns selected through a [`ColumnSelection`].
    Table(Table),
}

/// Equal-length, finite `x`/`y` and optional `z` series.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Option<Vec<f64>>,
}

impl ExtractedData {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// Resolves `source` into series.
///
/// Tables must contain the selected `x` and `y` columns. A `z` column is
/// used when one is selected and present and ignored otherwise.
pub fn extract(source: &DataSource, columns: &ColumnSelection) -> AudioResult<ExtractedData> {
    let data = match source {
        DataSource::Series(values) => ExtractedData {
            x: (0..values.len()).map(|i| i as f64).collect(),
            y: values.clone(),
            z: None,
        },
        DataSource::Columns { x, y, z } => ExtractedData {
            x: x.clone(),
            y: y.clone(),
            z: z.clone(),
        },
        DataSource::Table(table) => {
            let required = |name: &str| {
                table.column(name).map(<[f64]>::to_vec).ok_or_else(|| {
                    let available: Vec<&str> = table.column_names().collect();
                    AudioError::invalid_data(format!(
                        "column '{}' not found (available: {})",
                        name,
                        available.join(", ")
                    ))
                })
            };
            ExtractedData {
                x: required(columns.x.as_str())?,
                y: required(columns.y.as_str())?,
                z: columns
                    .z
                    .as_deref()
                    .and_then(|name| table.column(name))
                    .map(<[f64]>::to_vec),
            }
        }
    };
    check(&data)?;
    Ok(data)
}

fn check(data: &ExtractedData) -> AudioResult<()> {
    if data.is_empty() {
        return Err(AudioError::invalid_data("no data points"));
    }
    let series = [("x", Some(&data.x)), ("y", Some(&data.y)), ("z", data.z.as_ref())];
    for (name, values) in series {
        let Some(values) = values else { continue };
        if values.len() != data.len() {
            return Err(AudioError::invalid_data(format!(
                "{} has {} values, expected {}",
                name,
                values.len(),
                data.len()
            )));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(AudioError::invalid_data(format!(
                "{}[{}] is not finite",
                name, i
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn xyz() -> ColumnSelection {
        ColumnSelection {
            z: Some("z".to_string()),
            ..ColumnSelection::default()
        }
    }

    #[test]
    fn test_series_uses_indices() {
        let data = extract(&DataSource::Series(vec![5.0, 3.0, 9.0]), &xyz()).unwrap();
        assert_eq!(data.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(data.y, vec![5.0, 3.0, 9.0]);
        assert_eq!(data.z, None);
    }

    #[test]
    fn test_table_selects_columns() {
        let table: Table = [
            ("time", vec![0.0, 1.0]),
            ("value", vec![2.0, 4.0]),
            ("z", vec![1.0, -1.0]),
        ]
        .into_iter()
        .collect();
        let selection = ColumnSelection {
            x: "time".to_string(),
            y: "value".to_string(),
            z: Some("z".to_string()),
        };
        let data = extract(&DataSource::Table(table), &selection).unwrap();
        assert_eq!(data.x, vec![0.0, 1.0]);
        assert_eq!(data.y, vec![2.0, 4.0]);
        assert_eq!(data.z, Some(vec![1.0, -1.0]));
    }

    #[test]
    fn test_table_missing_z_is_absent() {
        let table: Table = [("x", vec![0.0]), ("y", vec![1.0])].into_iter().collect();
        let data = extract(&DataSource::Table(table), &xyz()).unwrap();
        assert_eq!(data.z, None);
    }

    #[test]
    fn test_table_missing_y_is_error() {
        let table: Table = [("x", vec![0.0]), ("w", vec![1.0])].into_iter().collect();
        let err = extract(&DataSource::Table(table), &xyz()).unwrap_err();
        match err {
            AudioError::InvalidData { message } => {
                assert!(message.contains("'y'"));
                assert!(message.contains("w, x"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_mismatched_rejected() {
        assert!(matches!(
            extract(&DataSource::Series(vec![]), &xyz()),
            Err(AudioError::InvalidData { .. })
        ));
        let columns = DataSource::Columns {
            x: vec![0.0, 1.0],
            y: vec![1.0, 2.0],
            z: Some(vec![0.0]),
        };
        assert!(matches!(
            extract(&columns, &xyz()),
            Err(AudioError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = extract(&DataSource::Series(vec![1.0, f64::NAN]), &xyz()).unwrap_err();
        assert!(err.to_string().contains("y[1]"));
    }
}
