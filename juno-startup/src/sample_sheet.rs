use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use juno_core::{Manifest, Result};

///
/// Write the manifest as the YAML sample sheet consumed by the workflow
/// engine. Parent directories are created as needed.
///
/// # Arguments
/// - manifest: validated samples
/// - path: the file to write
///
pub fn write_sample_sheet(manifest: &Manifest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, manifest)?;
    writer.flush()?;
    Ok(())
}

pub fn read_sample_sheet(path: &Path) -> Result<Manifest> {
    let reader = BufReader::new(File::open(path)?);
    let manifest = serde_yaml::from_reader(reader)?;
    Ok(manifest)
}
