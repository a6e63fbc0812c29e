//! Detection of the directory layout holding the input files.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use juno_core::{JunoError, Result};

use crate::consts::{ASSEMBLY_SUBDIR, CLEAN_FASTQ_SUBDIR};

///
/// How input files are organized under the input directory.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// Reads and assemblies live next to each other in the input directory
    Flat,
    /// The input directory is the output of the assembly pipeline: reads are
    /// in `clean_fastq/` and assemblies in `de_novo_assembly_filtered/`
    AssemblyPipelineOutput,
}

///
/// The directories to scan for each kind of input file.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSubdirs {
    pub fastq: PathBuf,
    pub fasta: PathBuf,
}

///
/// Detect the layout of `root_dir`. Only the existence of the two child
/// directories is checked, not their content.
///
pub fn detect_layout(root_dir: &Path) -> InputLayout {
    let is_assembly_output =
        root_dir.join(CLEAN_FASTQ_SUBDIR).exists() && root_dir.join(ASSEMBLY_SUBDIR).exists();

    if is_assembly_output {
        InputLayout::AssemblyPipelineOutput
    } else {
        InputLayout::Flat
    }
}

pub fn resolve_subdirs(root_dir: &Path, layout: InputLayout) -> InputSubdirs {
    match layout {
        InputLayout::Flat => InputSubdirs {
            fastq: root_dir.to_path_buf(),
            fasta: root_dir.to_path_buf(),
        },
        InputLayout::AssemblyPipelineOutput => InputSubdirs {
            fastq: root_dir.join(CLEAN_FASTQ_SUBDIR),
            fasta: root_dir.join(ASSEMBLY_SUBDIR),
        },
    }
}

///
/// Cheap pre-check that `dir` holds at least one regular file ending with one
/// of `accepted_suffixes`. Only the immediate entries of `dir` are looked at.
///
/// # Arguments
/// - dir: directory to scan
/// - accepted_suffixes: file name endings, e.g. `.fastq.gz`
///
pub fn validate_has_extension(dir: &Path, accepted_suffixes: &[&str]) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if accepted_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix))
        {
            debug!("Found {} in {}", file_name, dir.display());
            return Ok(true);
        }
    }

    Err(JunoError::ValidationError {
        dir: dir.to_path_buf(),
        suffixes: accepted_suffixes.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FASTA_EXTENSIONS, FASTQ_EXTENSIONS};
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_flat_layout_without_subdirs() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path();

        assert_eq!(detect_layout(root), InputLayout::Flat);

        let subdirs = resolve_subdirs(root, InputLayout::Flat);
        assert_eq!(subdirs.fastq, root);
        assert_eq!(subdirs.fasta, root);
    }

    #[rstest]
    fn test_one_subdir_is_not_enough() {
        let tempdir = tempfile::tempdir().unwrap();
        fs::create_dir(tempdir.path().join(CLEAN_FASTQ_SUBDIR)).unwrap();

        assert_eq!(detect_layout(tempdir.path()), InputLayout::Flat);
    }

    #[rstest]
    fn test_assembly_pipeline_layout() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path();
        fs::create_dir(root.join(CLEAN_FASTQ_SUBDIR)).unwrap();
        fs::create_dir(root.join(ASSEMBLY_SUBDIR)).unwrap();

        let layout = detect_layout(root);
        assert_eq!(layout, InputLayout::AssemblyPipelineOutput);

        let subdirs = resolve_subdirs(root, layout);
        assert_eq!(subdirs.fastq, root.join("clean_fastq"));
        assert_eq!(subdirs.fasta, root.join("de_novo_assembly_filtered"));
    }

    #[rstest]
    fn test_validate_has_extension() {
        let tempdir = tempfile::tempdir().unwrap();
        let root = tempdir.path();
        fs::write(root.join("notes.txt"), "x").unwrap();
        fs::create_dir(root.join("reads.fastq")).unwrap();

        // a directory named like a fastq file does not count
        let result = validate_has_extension(root, FASTQ_EXTENSIONS);
        assert!(matches!(result, Err(JunoError::ValidationError { .. })));

        fs::write(root.join("a_R1.fq.gz"), "x").unwrap();
        assert!(validate_has_extension(root, FASTQ_EXTENSIONS).unwrap());
        assert!(validate_has_extension(root, FASTA_EXTENSIONS).is_err());
    }

    #[rstest]
    fn test_validation_error_names_dir_and_suffixes() {
        let tempdir = tempfile::tempdir().unwrap();

        match validate_has_extension(tempdir.path(), FASTA_EXTENSIONS) {
            Err(JunoError::ValidationError { dir, suffixes }) => {
                assert_eq!(dir, tempdir.path());
                assert_eq!(suffixes, vec![".fasta".to_string()]);
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
    }
}
