use pagegrab_core::logging;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; a broken state dir must not stop the run.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    cli::run_from_args()
}
