//! File name patterns that turn input file names into sample identifiers.
//!
//! Sample identifiers are captured as text and never parsed, so `1234_R1.fq`
//! belongs to sample `"1234"`.
//!
//! Known limitation: a paired-read name with a `_1`/`_2` (or `S<digits>`)
//! chunk right after a separator can be split in the wrong place. For
//! `1234_S001_PE_R2.fastq.gz` the mate is read from `S001`, so both files of
//! that pair end up as `R1`. Such names have to be avoided upstream.

use std::sync::LazyLock;

use regex::Regex;

use juno_core::FileRole;

use crate::consts::{FASTA_EXTENSIONS, FASTQ_EXTENSIONS};

static PAIRED_READ_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(.*?)(?:_S\d+_|_S\d+.|_|\.)(?:_?L555_)?p?R?(1|2)(?:_.*\.|\..*\.|\.)f(?:ast)?q(?:\.gz)?$",
    )
    .expect("paired read pattern is valid")
});

static ASSEMBLY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\.fasta$").expect("assembly pattern is valid"));

///
/// Match a paired-end read file name, returning the sample id and the mate
/// (`"1"` or `"2"`).
///
pub fn match_paired(file_name: &str) -> Option<(String, String)> {
    let captures = PAIRED_READ_PATTERN.captures(file_name)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

///
/// Match an assembly file name (`<sample>.fasta`), returning the sample id.
///
pub fn match_assembly(file_name: &str) -> Option<String> {
    let captures = ASSEMBLY_PATTERN.captures(file_name)?;
    Some(captures[1].to_string())
}

///
/// The supported kinds of input file.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKindSpec {
    PairedRead,
    Assembly,
}

impl FileKindSpec {
    pub fn accepted_suffixes(&self) -> &'static [&'static str] {
        match self {
            FileKindSpec::PairedRead => FASTQ_EXTENSIONS,
            FileKindSpec::Assembly => FASTA_EXTENSIONS,
        }
    }

    ///
    /// Match a file name against this kind, returning the sample id and the
    /// role the file plays for that sample.
    ///
    pub fn match_file(&self, file_name: &str) -> Option<(String, FileRole)> {
        match self {
            FileKindSpec::PairedRead => {
                let (sample, mate) = match_paired(file_name)?;
                let role = FileRole::from_mate(&mate)?;
                Some((sample, role))
            }
            FileKindSpec::Assembly => {
                match_assembly(file_name).map(|sample| (sample, FileRole::Assembly))
            }
        }
    }
}
