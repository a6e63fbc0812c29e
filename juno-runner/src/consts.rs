pub const RUN_CMD: &str = "run";

pub const SNAKEMAKE_BIN: &str = "snakemake";

pub const DEFAULT_PIPELINE_NAME: &str = "Juno";
pub const DEFAULT_PIPELINE_VERSION: &str = "NA";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_WORKDIR: &str = ".";
pub const DEFAULT_SAMPLE_SHEET: &str = "config/sample_sheet.yaml";
pub const DEFAULT_USER_PARAMETERS: &str = "config/user_parameters.yaml";
pub const DEFAULT_FIXED_PARAMETERS: &str = "config/pipeline_parameters.yaml";
pub const DEFAULT_SNAKEFILE: &str = "Snakefile";
pub const DEFAULT_REPORT_NAME: &str = "snakemake_report.html";
pub const DEFAULT_CORES: u32 = 300;
pub const DEFAULT_QUEUE: &str = "bio";
pub const DEFAULT_TIME_LIMIT: u32 = 60;
pub const DEFAULT_CONDA_FRONTEND: &str = "mamba";
pub const DEFAULT_LATENCY_WAIT: u32 = 60;

pub const AUDIT_TRAIL_DIR: &str = "audit_trail";
pub const CLUSTER_LOG_DIR: &str = "log/cluster";

pub const GIT_AUDIT_FILE: &str = "log_git.yaml";
pub const CONDA_AUDIT_FILE: &str = "log_conda.txt";
pub const PIPELINE_AUDIT_FILE: &str = "log_pipeline.yaml";
pub const SAMPLE_SHEET_AUDIT_FILE: &str = "sample_sheet.yaml";
pub const USER_PARAMETERS_AUDIT_FILE: &str = "user_parameters.yaml";

pub const AUDIT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub const NOT_AVAILABLE_GIT: &str = "Not available. This might be because this folder is not a repository or it was downloaded manually instead of through the command line.";
pub const NOT_AVAILABLE_CONDA: &str = "Not available. conda could not be run in this environment.";
pub const UNKNOWN_HOSTNAME: &str = "<unknown hostname>";
