use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "ALLOC_GRADER_LOG";

/// Installs a compact stderr subscriber. `ALLOC_GRADER_LOG` or `RUST_LOG` override the level.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| {
            EnvFilter::try_new(if level.contains('=') {
                level.to_string()
            } else {
                format!("alloc_grader={level}")
            })
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
