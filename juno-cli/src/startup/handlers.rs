use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use juno_core::Manifest;
use juno_startup::consts::DEFAULT_SAMPLE_SHEET;
use juno_startup::{Metadata, PipelineStartup, write_sample_sheet};

/// Configure a discovery run from the shared startup arguments.
pub fn build_startup(matches: &ArgMatches) -> Result<PipelineStartup> {
    let input_dir = matches
        .get_one::<PathBuf>("input")
        .context("An input directory is required.")?;
    let input_type = matches
        .get_one::<String>("type")
        .context("An input type is required.")?;

    let mut builder = PipelineStartup::builder()
        .with_input_dir(input_dir)
        .with_input_type(input_type.as_str());

    if let Some(min_file_size) = matches.get_one::<u64>("minfilesize") {
        builder = builder.with_min_file_size(*min_file_size);
    }
    if let Some(min_lines) = matches.get_one::<u64>("min-lines") {
        builder = builder.with_min_num_lines(*min_lines);
    }
    if let Some(exclusion_file) = matches.get_one::<PathBuf>("exclusion-file") {
        builder = builder.with_exclusion_file(exclusion_file);
    }

    Ok(builder.finish()?)
}

///
/// Load the metadata table given with `--metadata`, or the species report in
/// the input directory. A broken report that the user did not ask for is only
/// a warning.
///
fn load_sample_metadata(
    matches: &ArgMatches,
    startup: &PipelineStartup,
) -> Result<Option<Metadata>> {
    match matches.get_one::<PathBuf>("metadata") {
        Some(path) => startup
            .get_metadata_from_csv_file(Some(path.as_path()), None)
            .with_context(|| format!("Could not read the metadata in {}", path.display())),
        None => match startup.get_metadata_from_csv_file(None, None) {
            Ok(metadata) => Ok(metadata),
            Err(err) => {
                warn!("Ignoring the species report in the input directory: {err}");
                Ok(None)
            }
        },
    }
}

///
/// Run the discovery and log what was found. Metadata is optional.
///
pub fn discover_samples(matches: &ArgMatches) -> Result<(PipelineStartup, Manifest)> {
    let startup = build_startup(matches)?;
    let manifest = startup.start().with_context(|| {
        format!(
            "Could not collect the samples in {}",
            startup.input_dir().display()
        )
    })?;

    if let Some(metadata) = load_sample_metadata(matches, &startup)? {
        let known = manifest
            .sample_ids()
            .filter(|sample| metadata.contains_key(*sample))
            .count();
        info!(
            "Metadata available for {} of {} samples",
            known,
            manifest.len()
        );
    }

    Ok((startup, manifest))
}

pub fn sample_sheet_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("samplesheet")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_SHEET))
}

pub fn write_manifest(manifest: &Manifest, sample_sheet: &Path) -> Result<()> {
    write_sample_sheet(manifest, sample_sheet).with_context(|| {
        format!(
            "Could not write the sample sheet to {}",
            sample_sheet.display()
        )
    })?;
    info!(
        "Wrote {} samples to {}",
        manifest.len(),
        sample_sheet.display()
    );
    Ok(())
}

pub fn run_startup(matches: &ArgMatches) -> Result<()> {
    let (_, manifest) = discover_samples(matches)?;
    write_manifest(&manifest, &sample_sheet_path(matches))?;
    Ok(())
}
