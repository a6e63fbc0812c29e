//! Optional per-sample metadata, e.g. the species identified for each sample.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use juno_core::{JunoError, Result};

use crate::consts::METADATA_SAMPLE_COLUMN;

/// Sample id to `{column: value}`.
pub type Metadata = BTreeMap<String, BTreeMap<String, String>>;

///
/// Load a comma separated metadata table keyed by sample id.
///
/// A missing file is not an error and yields `None`. A file whose header
/// lacks any of `expected_columns` (compared case-sensitively) is.
///
/// # Arguments
/// - path: the csv file
/// - expected_columns: columns that must be present; `sample` is always required
///
pub fn load_metadata(path: &Path, expected_columns: &[&str]) -> Result<Option<Metadata>> {
    if !path.is_file() {
        info!("No metadata file found at {}", path.display());
        return Ok(None);
    }

    let mut reader = ReaderBuilder::new().from_path(path)?;
    let headers = reader.headers()?.clone();

    let column_error = || JunoError::MetadataColumnError {
        file: path.to_path_buf(),
        expected: expected_columns.iter().map(|c| c.to_string()).collect(),
    };

    let sample_idx = headers
        .iter()
        .position(|h| h == METADATA_SAMPLE_COLUMN)
        .ok_or_else(column_error)?;

    let mut columns: Vec<(String, usize)> = Vec::new();
    for column in expected_columns {
        let idx = headers
            .iter()
            .position(|h| h == *column)
            .ok_or_else(column_error)?;
        if *column != METADATA_SAMPLE_COLUMN {
            columns.push((column.to_string(), idx));
        }
    }

    let mut metadata = Metadata::new();
    for record in reader.records() {
        let record = record?;
        let Some(sample) = record.get(sample_idx) else {
            continue;
        };
        let values = columns
            .iter()
            .map(|(name, idx)| (name.clone(), record.get(*idx).unwrap_or_default().to_string()))
            .collect();
        metadata.insert(sample.to_string(), values);
    }

    info!("Loaded metadata for {} samples from {}", metadata.len(), path.display());
    Ok(Some(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_METADATA_COLUMNS;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    #[fixture]
    fn report() -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top1_species_multireport.csv");
        std::fs::write(&path, "sample,genus,species\n1234,salmonella,enterica\n").unwrap();
        (dir, path)
    }

    #[rstest]
    fn test_load_metadata(report: (TempDir, std::path::PathBuf)) {
        let (_dir, path) = report;
        let metadata = load_metadata(&path, DEFAULT_METADATA_COLUMNS).unwrap().unwrap();

        let expected: Metadata = BTreeMap::from([(
            "1234".to_string(),
            BTreeMap::from([
                ("genus".to_string(), "salmonella".to_string()),
                ("species".to_string(), "enterica".to_string()),
            ]),
        )]);
        assert_eq!(metadata, expected);
    }

    #[rstest]
    fn test_missing_metadata_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = load_metadata(&dir.path().join("missing.csv"), DEFAULT_METADATA_COLUMNS);
        assert!(metadata.unwrap().is_none());
    }

    #[rstest]
    fn test_wrong_column_names(report: (TempDir, std::path::PathBuf)) {
        let (_dir, path) = report;
        let result = load_metadata(&path, &["Sample", "Genus"]);
        match result {
            Err(err @ JunoError::MetadataColumnError { .. }) => {
                assert!(
                    err.to_string()
                        .contains("does not contain one or more of the expected column names")
                );
            }
            other => panic!("expected a metadata column error, got {:?}", other),
        }
    }
}
