//! Shared configuration for gpsd clients.
//!
//! The crate describes where a gpsd daemon can be reached and how the
//! binaries should log. Library callers typically only need
//! [`SocketEndpoint`]; binaries flatten [`Config`] into their clap parser so
//! flags and environment variables resolve in one pass.

mod defaults;
mod logging;
mod socket;

use std::time::Duration;

use clap::Args;

pub use self::defaults::{
    DEFAULT_ADDRESS, DEFAULT_CONNECT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_HOST,
    DEFAULT_LOG_FILTER, DEFAULT_PORT, default_endpoint,
};
pub use self::logging::{LogFormat, LogFormatParseError};
pub use self::socket::{SocketEndpoint, SocketParseError};

/// Resolved client configuration.
///
/// Each field resolves from its command-line flag, then its `GPSD_*`
/// environment variable, then the built-in default.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Daemon address: `host:port`, `tcp://host:port` or `unix:///path`.
    #[arg(long, env = "GPSD_ENDPOINT", default_value = DEFAULT_ADDRESS)]
    pub endpoint: SocketEndpoint,
    /// Gives up connecting after this many milliseconds.
    #[arg(
        long,
        env = "GPSD_CONNECT_TIMEOUT_MS",
        value_name = "MILLIS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT_MS
    )]
    pub connect_timeout_ms: u64,
    /// `tracing` filter expression for diagnostics on stderr.
    #[arg(long, env = "GPSD_LOG_FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
    /// Diagnostic log format: `compact` or `json`.
    #[arg(long, env = "GPSD_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// Daemon address.
    #[must_use]
    pub const fn endpoint(&self) -> &SocketEndpoint {
        &self.endpoint
    }

    /// Connection timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// `tracing` filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for log records.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        config: Config,
    }

    fn parse(args: &[&str]) -> Config {
        Harness::try_parse_from(std::iter::once("gpsd").chain(args.iter().copied()))
            .expect("arguments should parse")
            .config
    }

    #[test]
    fn default_targets_local_daemon() {
        let config = Config::default();
        assert_eq!(config.endpoint().to_string(), "tcp://localhost:2947");
        assert_eq!(config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn flag_defaults_match_the_default_config() {
        assert_eq!(parse(&[]), Config::default());
    }

    #[rstest]
    #[case::endpoint(&["--endpoint", "unix:///var/run/gpsd.sock"])]
    #[case::timeout(&["--connect-timeout-ms", "250"])]
    #[case::format(&["--log-format", "JSON"])]
    fn flags_override_defaults(#[case] args: &[&str]) {
        assert_ne!(parse(args), Config::default());
    }

    #[test]
    fn flags_resolve_typed_values() {
        let config = parse(&[
            "--endpoint",
            "unix:///var/run/gpsd.sock",
            "--connect-timeout-ms",
            "250",
            "--log-filter",
            "gpsd_session=debug",
        ]);
        assert_eq!(
            config.endpoint().unix_path().map(camino::Utf8Path::as_str),
            Some("/var/run/gpsd.sock")
        );
        assert_eq!(config.connect_timeout(), Duration::from_millis(250));
        assert_eq!(config.log_filter(), "gpsd_session=debug");
    }

    #[rstest]
    #[case::endpoint(&["--endpoint", "udp://localhost"])]
    #[case::timeout(&["--connect-timeout-ms", "soon"])]
    #[case::format(&["--log-format", "pretty"])]
    fn rejects_invalid_values(#[case] args: &[&str]) {
        let result = Harness::try_parse_from(std::iter::once("gpsd").chain(args.iter().copied()));
        assert!(result.is_err());
    }

    #[test]
    fn default_address_matches_default_endpoint() {
        let parsed: SocketEndpoint = DEFAULT_ADDRESS.parse().expect("default address parses");
        assert_eq!(parsed, default_endpoint());
    }
}
