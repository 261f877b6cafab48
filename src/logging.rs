//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so they never mix with the version lines a
//! pipeline may read from stdout.

use tracing::metadata::Level;
use tracing_subscriber::filter::EnvFilter;

/// Maps the number of `-v` flags to a log level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set and valid; otherwise the crate logs
/// at the level selected by `verbose`.
pub fn setup_logging(verbose: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbose);
    let default_directive = format!(
        "warn,ncs_pkg_bumper={}",
        level.to_string().to_ascii_lowercase()
    );
    let default_env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse(&default_directive)?;

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(directive) => match EnvFilter::builder().parse(&directive) {
            Ok(env_filter) => env_filter,
            Err(err) => {
                eprintln!("invalid log filter: {err}");
                eprintln!("falling back to default logging");
                default_env_filter
            }
        },
        Err(_) => default_env_filter,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
