use crate::error::{AutorecError, Result};
use tracing_subscriber::EnvFilter;

/// Default filter for the CLI verbosity flags; `RUST_LOG` takes precedence.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = level_for(verbose, quiet);
            EnvFilter::try_new(level)
                .map_err(|e| AutorecError::Telemetry(format!("invalid filter '{level}': {e}")))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| AutorecError::Telemetry(e.to_string()))
}
