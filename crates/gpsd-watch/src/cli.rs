//! Command-line arguments for `gpsd-watch`.

use std::time::Duration;

use clap::Parser;
use gpsd_config::Config;
use gpsd_session::ReportClass;

/// Streams reports from a gpsd daemon to stdout as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "gpsd-watch", version)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: Config,
    /// Report class to print. Repeat to select several.
    #[arg(
        long = "class",
        value_name = "CLASS",
        default_values_t = [ReportClass::Tpv, ReportClass::Sky]
    )]
    pub(crate) classes: Vec<ReportClass>,
    /// Closes the session after this many seconds.
    #[arg(long, value_name = "SECONDS")]
    pub(crate) duration_secs: Option<u64>,
}

impl Cli {
    /// How long to watch before closing, if bounded.
    pub(crate) fn duration(&self) -> Option<Duration> {
        self.duration_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use gpsd_config::{DEFAULT_CONNECT_TIMEOUT, LogFormat};
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gpsd-watch").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_watch_fixes_and_sky_views_locally() {
        let cli = parse(&[]);
        assert_eq!(cli.config.endpoint().to_string(), "tcp://localhost:2947");
        assert_eq!(cli.config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(cli.classes, vec![ReportClass::Tpv, ReportClass::Sky]);
        assert_eq!(cli.duration(), None);
        assert_eq!(cli.config.log_format(), LogFormat::Compact);
    }

    #[rstest]
    #[case::bare("gpsd.local:3000", "tcp://gpsd.local:3000")]
    #[case::unix("unix:///var/run/gpsd.sock", "unix:///var/run/gpsd.sock")]
    fn endpoint_accepts_address_forms(#[case] input: &str, #[case] expected: &str) {
        let cli = parse(&["--endpoint", input]);
        assert_eq!(cli.config.endpoint().to_string(), expected);
    }

    #[test]
    fn classes_replace_the_defaults() {
        let cli = parse(&["--class", "PPS", "--class", "TOFF"]);
        assert_eq!(cli.classes, vec![ReportClass::Pps, ReportClass::Toff]);
    }

    #[rstest]
    #[case::unknown_class(&["--class", "AIS"])]
    #[case::lowercase_class(&["--class", "tpv"])]
    #[case::bad_format(&["--log-format", "pretty"])]
    #[case::bad_endpoint(&["--endpoint", "udp://localhost"])]
    fn rejects_invalid_values(#[case] args: &[&str]) {
        let result = Cli::try_parse_from(std::iter::once("gpsd-watch").chain(args.iter().copied()));
        assert!(result.is_err());
    }

    #[test]
    fn duration_and_logging_flags_are_applied() {
        let cli = parse(&[
            "--duration-secs",
            "30",
            "--log-filter",
            "gpsd_session=debug",
            "--log-format",
            "JSON",
        ]);
        assert_eq!(cli.duration(), Some(Duration::from_secs(30)));
        assert_eq!(cli.config.log_filter(), "gpsd_session=debug");
        assert_eq!(cli.config.log_format(), LogFormat::Json);
    }
}
