mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::GradeError;
use crate::model::policy::GradingPolicy;
use crate::pipeline::run_grading;
use crate::pipeline::stage5_report::write_reports;

/// Grades the performance portion of the allocator assignment from benchmark score files.
#[derive(Debug, Parser)]
#[command(name = "alloc-grader", version, about)]
struct Cli {
    /// Directory holding cache-scratch/, cache-thrash/, larson/ and threadtest/.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Also write a JSON summary of metrics, indicators and grade to this path.
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,

    /// Log pipeline progress to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Log filter, e.g. `info` or `alloc_grader=trace`.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("failed to initialize logging: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GradeError> {
    let policy = GradingPolicy::lab4_v1();
    let report = run_grading(&cli.root, &policy)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&report, &mut out, cli.summary_json.as_deref())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
