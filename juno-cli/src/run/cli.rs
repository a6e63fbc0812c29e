use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

pub use juno_runner::consts::RUN_CMD;

use crate::startup::cli::startup_args;

fn flag(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).action(ArgAction::SetTrue).help(help)
}

fn path_arg(id: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name(value_name)
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn number_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("INT")
        .value_parser(value_parser!(u32))
        .help(help)
}

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .author("RIVM bioinformatics")
        .about("Collect the input samples and run the pipeline on them with snakemake.")
        .args(startup_args())
        .arg(path_arg(
            "config",
            "FILE",
            "YAML file with runner settings. Command line options take precedence.",
        ))
        .arg(
            Arg::new("pipelinename")
                .long("pipelinename")
                .value_name("STR")
                .help("Pipeline name [default: Juno]"),
        )
        .arg(
            Arg::new("pipelineversion")
                .long("pipelineversion")
                .value_name("VERSION")
                .help("Pipeline version [default: NA]"),
        )
        .arg(path_arg("output", "DIR", "Output directory [default: output]").short('o'))
        .arg(path_arg(
            "workingdir",
            "DIR",
            "Working directory of the pipeline [default: .]",
        ))
        .arg(path_arg(
            "pipelineparameters",
            "FILE",
            "Fixed pipeline parameters [default: config/pipeline_parameters.yaml]",
        ))
        .arg(path_arg(
            "userparameters",
            "FILE",
            "User parameters file to be created [default: config/user_parameters.yaml]",
        ))
        .arg(
            path_arg(
                "snakefile",
                "FILE",
                "Snakefile of the pipeline [default: Snakefile]",
            )
            .short('f'),
        )
        .arg(number_arg("cores", "Number of cores (and cluster jobs) to use [default: 300]"))
        .arg(flag("useconda", "Use conda environments in the pipeline."))
        .arg(
            Arg::new("conda-frontend")
                .long("conda-frontend")
                .value_parser(["conda", "mamba"])
                .help("Frontend to use for building conda environments [default: mamba]"),
        )
        .arg(flag("usesingularity", "Use singularity containers in the pipeline."))
        .arg(
            Arg::new("singularityargs")
                .long("singularityargs")
                .value_name("STR")
                .allow_hyphen_values(true)
                .help("Arguments to be passed to singularity"),
        )
        .arg(number_arg(
            "restarttimes",
            "Number of times to restart each step of the pipeline if it fails [default: 0]",
        ))
        .arg(number_arg(
            "latencywait",
            "Seconds to wait for an output file to appear after the execution of a job [default: 60]",
        ))
        .arg(
            Arg::new("queue")
                .long("queue")
                .short('q')
                .value_name("STR")
                .help("Queue that jobs are submitted to on the cluster [default: bio]"),
        )
        .arg(number_arg(
            "time-limit",
            "Wall clock limit of a cluster job in minutes [default: 60]",
        ))
        .arg(flag("local", "Run the pipeline on this machine instead of the cluster.").short('l'))
        .arg(flag("unlock", "Unlock the output directory (passed to snakemake).").short('u'))
        .arg(
            flag(
                "dryrun",
                "Print the steps the pipeline would take without running them (passed to snakemake).",
            )
            .short('n'),
        )
        .arg(flag(
            "rerunincomplete",
            "Re-run jobs if they are marked as incomplete (passed to snakemake).",
        ))
        .arg(
            Arg::new("snakemake-args")
                .long("snakemake-args")
                .value_name("KEY=VALUE")
                .num_args(1..)
                .help("Extra arguments passed to snakemake, e.g. until=[rule_a,rule_b]"),
        )
}
