use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

pub use juno_startup::consts::STARTUP_CMD;

/// Arguments that select and filter the input samples. Shared with `run`.
pub fn startup_args() -> Vec<Arg> {
    vec![
        Arg::new("input")
            .long("input")
            .short('i')
            .required(true)
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .help("Relative or absolute path to the input directory. It must contain the expected input files or be the output directory of the Juno-assembly pipeline."),
        Arg::new("type")
            .long("type")
            .default_value("both")
            .value_parser(["fastq", "fasta", "both"])
            .help("Expected input type of files in input directory."),
        Arg::new("minfilesize")
            .long("minfilesize")
            .short('m')
            .value_name("INT")
            .value_parser(value_parser!(u64))
            .conflicts_with("min-lines")
            .help("Minimum file size (in bytes) of input files. Smaller files are not run through the pipeline."),
        Arg::new("min-lines")
            .long("min-lines")
            .value_name("INT")
            .value_parser(value_parser!(u64))
            .help("Minimum number of lines of input files. Files with fewer lines are not run through the pipeline."),
        Arg::new("exclusion-file")
            .long("exclusion-file")
            .short('e')
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("File with one sample name per line. These samples are left out of the run."),
        Arg::new("samplesheet")
            .long("samplesheet")
            .short('s')
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Path to the sample sheet file to be created [default: config/sample_sheet.yaml]"),
        Arg::new("metadata")
            .long("metadata")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("Csv file with sample, genus and species columns [default: identify_species/top1_species_multireport.csv in the input directory]"),
    ]
}

pub fn create_startup_cli() -> Command {
    Command::new(STARTUP_CMD)
        .author("RIVM bioinformatics")
        .about("Find the samples in an input directory, validate them and write the sample sheet.")
        .args(startup_args())
}
