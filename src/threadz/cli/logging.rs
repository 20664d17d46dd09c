use flexi_logger::{Logger, LoggerHandle};

/// Starts stderr logging. `RUST_LOG` overrides the level picked from
/// `verbose`. The returned handle must stay alive for the whole run.
pub fn init(verbose: bool) -> Option<LoggerHandle> {
    let level = if verbose { "debug" } else { "warn" };
    let started = Logger::try_with_env_or_str(level).and_then(|logger| {
        logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start()
    });

    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    }
}
