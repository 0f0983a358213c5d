//! Shared components for CLI commands
//!
//! Logging setup and output helpers used by every command.

use crate::cli::args::CommonArgs;
use crate::{Error, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level selected on the command line.
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("icgem_reader={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to serialize report to JSON", e))?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Shorten a float for human output while keeping full precision in machine formats
pub fn format_value(value: f64) -> String {
    format!("{:.12e}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"degree": 2})).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"degree\": 2"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(-4.84165371736e-4), "-4.841653717360e-4");
        assert_eq!(format_value(0.0), "0.000000000000e0");
    }
}
