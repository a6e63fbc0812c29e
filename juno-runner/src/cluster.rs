//! LSF submission for cluster runs.

use std::path::Path;

///
/// Submission command handed to snakemake. `{threads}`, `{name}`,
/// `{wildcards}`, `{jobid}` and `{resources.mem_gb}` are filled in per job by
/// snakemake.
///
/// # Arguments
/// - queue: LSF queue to submit to
/// - log_dir: directory for the stdout/stderr of each job
/// - time_limit: wall clock limit in minutes
///
pub fn cluster_submit_template(queue: &str, log_dir: &Path, time_limit: u32) -> String {
    let log_dir = log_dir.display();
    format!(
        "bsub -q {queue} -n {{threads}} \
         -o {log_dir}/{{name}}_{{wildcards}}_{{jobid}}.out \
         -e {log_dir}/{{name}}_{{wildcards}}_{{jobid}}.err \
         -R \"span[hosts=1]\" -M {{resources.mem_gb}}G -W {time_limit}"
    )
}

pub fn cluster_job_name(pipeline_name: &str) -> String {
    format!("{pipeline_name}_{{name}}.jobid{{jobid}}")
}
