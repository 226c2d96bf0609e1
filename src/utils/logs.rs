use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

// Unknown level names fall back to INFO.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

// Installs the global subscriber; logs go to stderr so console output stays readable.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(config.log_level.as_str()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.json_logs {
        builder
            .with_ansi(false)
            .json()
            .init();
    } else {
        builder.init();
    }
}
