use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use juno_core::{JunoError, Manifest, Result};

///
/// Read the sample ids listed in an exclusion file, one per line. Blank
/// lines are ignored and surrounding whitespace is trimmed.
///
pub fn read_exclusion_file(path: &Path) -> Result<BTreeSet<String>> {
    if !path.is_file() {
        return Err(JunoError::InvalidExclusionFile(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    let mut excluded = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        let sample = line.trim();
        if !sample.is_empty() {
            excluded.insert(sample.to_string());
        }
    }

    Ok(excluded)
}

///
/// Drop every excluded sample from the manifest, returning the ids that were
/// actually removed.
///
pub fn exclude_samples(manifest: &mut Manifest, excluded: &BTreeSet<String>) -> Vec<String> {
    let mut removed = Vec::new();
    for sample in excluded {
        if manifest.remove(sample).is_some() {
            info!("Sample {} is excluded from this run", sample);
            removed.push(sample.clone());
        }
    }
    removed
}
