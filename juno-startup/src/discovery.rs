//! Grouping of input files into a [Manifest] and validation of its completeness.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use juno_core::utils::passes_threshold;
use juno_core::{FileThreshold, InputType, JunoError, Manifest, Result};

use crate::layout::InputSubdirs;
use crate::patterns::FileKindSpec;

///
/// Scan the immediate entries of `dir` and group every file that passes the
/// threshold and matches `spec` under its sample id. Files that are too small
/// or do not match are skipped silently.
///
/// Entries are visited in file name order. When two files claim the same role
/// of a sample the first one is kept and the other is skipped with a warning.
///
/// # Arguments
/// - dir: directory to scan
/// - spec: kind of file to look for
/// - threshold: minimum size or line count of a file
///
pub fn enlist_samples(
    dir: &Path,
    spec: FileKindSpec,
    threshold: &FileThreshold,
) -> Result<Manifest> {
    let mut samples = Manifest::new();

    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some((sample, role)) = spec.match_file(file_name) else {
            continue;
        };

        if !passes_threshold(&path, threshold)? {
            debug!("Skipping {}: below threshold or not a file", path.display());
            continue;
        }

        if let Some(kept) = samples.get(&sample).and_then(|record| record.get(role)) {
            warn!(
                "Skipping {}: {} of sample {} is already {}",
                path.display(),
                role,
                sample,
                kept
            );
            continue;
        }

        samples.insert_file(&sample, role, path.to_string_lossy().into_owned());
    }

    Ok(samples)
}

///
/// Run the fastq and/or fasta pass requested by `input_type` and union the
/// results. No completeness check is made here.
///
pub fn collect_samples(
    subdirs: &InputSubdirs,
    input_type: InputType,
    threshold: &FileThreshold,
) -> Result<Manifest> {
    let mut manifest = Manifest::new();

    if input_type.requires_paired() {
        let reads = enlist_samples(&subdirs.fastq, FileKindSpec::PairedRead, threshold)?;
        info!("Found paired reads for {} samples", reads.len());
        manifest.merge(reads);
    }

    if input_type.requires_assembly() {
        let assemblies = enlist_samples(&subdirs.fasta, FileKindSpec::Assembly, threshold)?;
        info!("Found assemblies for {} samples", assemblies.len());
        manifest.merge(assemblies);
    }

    Ok(manifest)
}

///
/// Check that the manifest is not empty and that every sample has all the
/// files `input_type` asks for. The pair check runs over every sample before
/// the assembly check.
///
/// # Arguments
/// - manifest: the grouped samples
/// - input_type: which roles are required
/// - dir: directory reported when nothing was found
/// - threshold: reported when nothing was found and a line count was set
///
pub fn validate_manifest(
    manifest: &Manifest,
    input_type: InputType,
    dir: &Path,
    threshold: &FileThreshold,
) -> Result<()> {
    if manifest.is_empty() {
        return Err(JunoError::EmptyManifestError {
            dir: dir.to_path_buf(),
            min_lines: threshold.min_lines(),
        });
    }

    if input_type.requires_paired() {
        if let Some((sample, _)) = manifest.iter().find(|(_, record)| !record.has_pair()) {
            return Err(JunoError::IncompletePairError(sample.clone()));
        }
    }

    if input_type.requires_assembly() {
        if let Some((sample, _)) = manifest.iter().find(|(_, record)| !record.has_assembly()) {
            return Err(JunoError::MissingAssemblyError(sample.clone()));
        }
    }

    Ok(())
}

///
/// Build and validate the manifest for one input directory. Either every
/// sample is complete and the whole manifest is returned, or an error is.
/// Errors name `input_dir`, not the subdirectories that were scanned.
///
pub fn build_manifest(
    input_dir: &Path,
    subdirs: &InputSubdirs,
    input_type: InputType,
    threshold: &FileThreshold,
) -> Result<Manifest> {
    let manifest = collect_samples(subdirs, input_type, threshold)?;
    validate_manifest(&manifest, input_type, input_dir, threshold)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use juno_core::FileRole;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn flat(dir: &TempDir) -> InputSubdirs {
        InputSubdirs {
            fastq: dir.path().to_path_buf(),
            fasta: dir.path().to_path_buf(),
        }
    }

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "this\nfile\nhas\ncontents").unwrap();
        path
    }

    #[rstest]
    fn test_enlist_paired_samples() {
        let dir = tempfile::tempdir().unwrap();
        let r1 = touch(&dir, "s_R1.fastq");
        let r2 = touch(&dir, "s_R2.fastq.gz");
        touch(&dir, "s.fasta");
        touch(&dir, "README.md");

        let samples =
            enlist_samples(dir.path(), FileKindSpec::PairedRead, &FileThreshold::default())
                .unwrap();

        assert_eq!(samples.len(), 1);
        let record = samples.get("s").unwrap();
        assert_eq!(record.get(FileRole::R1), Some(r1.to_string_lossy().as_ref()));
        assert_eq!(record.get(FileRole::R2), Some(r2.to_string_lossy().as_ref()));
        assert_eq!(record.get(FileRole::Assembly), None);
    }

    #[rstest]
    fn test_small_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir, "s_R1.fastq");
        fs::write(dir.path().join("s_R2.fastq"), "").unwrap();

        let samples =
            enlist_samples(dir.path(), FileKindSpec::PairedRead, &FileThreshold::MinFileSize(1))
                .unwrap();

        assert!(!samples.get("s").unwrap().has_pair());
    }

    #[rstest]
    fn test_fasta_only_sample_fails_pair_check() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir, "sample1_R1.fastq");
        touch(&dir, "sample1_R2.fastq");
        touch(&dir, "sample1.fasta");
        touch(&dir, "sample2.fasta");

        let result =
            build_manifest(dir.path(), &flat(&dir), InputType::Both, &FileThreshold::default());
        assert!(matches!(result, Err(JunoError::IncompletePairError(s)) if s == "sample2"));
    }

    #[rstest]
    fn test_missing_assembly() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir, "sample1_R1.fastq");
        touch(&dir, "sample1_R2.fastq");

        let result =
            build_manifest(dir.path(), &flat(&dir), InputType::Both, &FileThreshold::default());
        assert!(matches!(result, Err(JunoError::MissingAssemblyError(s)) if s == "sample1"));
    }

    #[rstest]
    fn test_empty_manifest_reports_line_threshold() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir, "sample1_R1.fastq");
        touch(&dir, "sample1_R2.fastq");

        let result = build_manifest(
            dir.path(),
            &flat(&dir),
            InputType::Fastq,
            &FileThreshold::MinLines(1000),
        );
        match result {
            Err(err @ JunoError::EmptyManifestError { .. }) => {
                assert!(err.to_string().contains("1000"));
            }
            other => panic!("expected an empty manifest error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_duplicate_role_keeps_first_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let fastq = touch(&dir, "s_R1.fastq");
        touch(&dir, "s_R1.fq.gz");
        let r2 = touch(&dir, "s_R2.fastq");

        let manifest =
            build_manifest(dir.path(), &flat(&dir), InputType::Fastq, &FileThreshold::default())
                .unwrap();

        let record = manifest.get("s").unwrap();
        assert_eq!(record.get(FileRole::R1), Some(fastq.to_string_lossy().as_ref()));
        assert_eq!(record.get(FileRole::R2), Some(r2.to_string_lossy().as_ref()));

        // a second scan picks the same file
        let again =
            build_manifest(dir.path(), &flat(&dir), InputType::Fastq, &FileThreshold::default())
                .unwrap();
        assert_eq!(again, manifest);
    }

    #[rstest]
    fn test_empty_manifest_names_input_dir_for_assembly_layout() {
        let dir = tempfile::tempdir().unwrap();
        let subdirs = InputSubdirs {
            fastq: dir.path().join("clean_fastq"),
            fasta: dir.path().join("de_novo_assembly_filtered"),
        };
        fs::create_dir(&subdirs.fastq).unwrap();
        fs::create_dir(&subdirs.fasta).unwrap();
        fs::write(subdirs.fastq.join("s_R1.fastq"), "x\n").unwrap();
        fs::write(subdirs.fastq.join("s_R2.fastq"), "x\n").unwrap();
        fs::write(subdirs.fasta.join("s.fasta"), "x\n").unwrap();

        let result = build_manifest(
            dir.path(),
            &subdirs,
            InputType::Both,
            &FileThreshold::MinLines(1000),
        );
        match result {
            Err(JunoError::EmptyManifestError { dir: reported, .. }) => {
                assert_eq!(reported, dir.path());
            }
            other => panic!("expected an empty manifest error, got {:?}", other),
        }
    }
}
