mod run;
mod startup;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::Command;
use env_logger::Builder;
use log::LevelFilter;

use juno_core::text::{error_formatter, message_formatter};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "juno";
    pub const BIN_NAME: &str = "juno";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("RIVM bioinformatics")
        .about("Juno pipeline. Automated pipeline for bacterial genomics.")
        .subcommand_required(true)
        .subcommand(startup::cli::create_startup_cli())
        .subcommand(run::cli::create_run_cli())
}

/// Log to stderr at `Info` unless `RUST_LOG` says otherwise.
fn init_logging() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn dispatch() -> Result<()> {
    let matches = build_parser().get_matches();
    print!(
        "{}",
        message_formatter(&format!("{} version {}", consts::PKG_NAME, consts::VERSION))
    );

    match matches.subcommand() {
        //
        // STARTUP
        //
        Some((startup::cli::STARTUP_CMD, matches)) => {
            startup::handlers::run_startup(matches)?;
        }

        //
        // RUN
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_run(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    if let Err(err) = dispatch() {
        eprint!("{}", error_formatter(&format!("{err:#}")));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
