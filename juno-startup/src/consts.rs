/// Subcommand that only runs sample discovery.
pub const STARTUP_CMD: &str = "startup";

/// Child directory holding the trimmed reads in the output of the assembly pipeline.
pub const CLEAN_FASTQ_SUBDIR: &str = "clean_fastq";

/// Child directory holding the filtered assemblies in the output of the assembly pipeline.
pub const ASSEMBLY_SUBDIR: &str = "de_novo_assembly_filtered";

/// Accepted suffixes for paired-end read files.
pub const FASTQ_EXTENSIONS: &[&str] = &[".fastq", ".fastq.gz", ".fq", ".fq.gz"];

/// Accepted suffixes for assembly files.
pub const FASTA_EXTENSIONS: &[&str] = &[".fasta"];

/// Species identification report written by the assembly pipeline, relative
/// to the input directory.
pub const DEFAULT_METADATA_FILE: &str = "identify_species/top1_species_multireport.csv";

/// Columns expected in the metadata file unless the caller asks for others.
pub const DEFAULT_METADATA_COLUMNS: &[&str] = &["sample", "genus", "species"];

/// Column holding the sample identifier in a metadata file.
pub const METADATA_SAMPLE_COLUMN: &str = "sample";

pub const DEFAULT_SAMPLE_SHEET: &str = "config/sample_sheet.yaml";
