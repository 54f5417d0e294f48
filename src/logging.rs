// ==========================================
// Logging initialization
// ==========================================
// tracing + tracing-subscriber, level from the environment,
// output on stderr so stdout stays clean for reports
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the output format ("json" or text)
pub const LOG_FORMAT_ENV: &str = "CITIZENSHIP_LOG_FORMAT";

/// Initializes logging
///
/// # Environment
/// - RUST_LOG: level filter (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=citizenship_eligibility::engine=trace
/// - CITIZENSHIP_LOG_FORMAT=json: one JSON object per line
///
/// # Example
/// ```no_run
/// use citizenship_eligibility::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Test logging: debug level, captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
